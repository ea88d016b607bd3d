//! Endpoint handlers: deserialize, call into the core, convert back out.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::Error;
use crate::periods::{Period, PeriodKind, RawPeriod, build_periods};
use crate::returns::Instrument;
use crate::transactions::{self, RawTransaction};
use crate::{filter, returns, validator};

use super::AppState;
use super::metrics;
use super::wire::{
    DetailBody, FilterBody, FilterResponse, HealthBody, ParseBody, PerformanceBody, ReturnsBody,
    ReturnsResponse, TransactionBody, ValidatorBody, ValidatorResponse,
};

/// A core [`Error`] surfaced over HTTP: 400 with a `detail` body.
pub(super) struct ApiRejection(Error);

impl From<Error> for ApiRejection {
    fn from(err: Error) -> Self {
        ApiRejection(err)
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        tracing::debug!(%detail, "request rejected");
        (StatusCode::BAD_REQUEST, Json(DetailBody { detail })).into_response()
    }
}

fn period_sets(
    q: Vec<super::wire::PeriodBody>,
    p: Vec<super::wire::PeriodBody>,
    k: Vec<super::wire::PeriodBody>,
) -> Result<(Vec<Period>, Vec<Period>, Vec<Period>), Error> {
    let q_raw: Vec<RawPeriod> = q.into_iter().map(Into::into).collect();
    let p_raw: Vec<RawPeriod> = p.into_iter().map(Into::into).collect();
    let k_raw: Vec<RawPeriod> = k.into_iter().map(Into::into).collect();
    Ok((
        build_periods(&q_raw, PeriodKind::Q)?,
        build_periods(&p_raw, PeriodKind::P)?,
        build_periods(&k_raw, PeriodKind::K)?,
    ))
}

pub(super) async fn parse(
    Json(body): Json<ParseBody>,
) -> Result<Json<Vec<TransactionBody>>, ApiRejection> {
    let expenses: Vec<RawTransaction> = body.into_expenses().into_iter().map(Into::into).collect();
    let batch = transactions::build_transactions(&expenses)?;
    Ok(Json(
        batch.transactions.iter().map(TransactionBody::from).collect(),
    ))
}

pub(super) async fn validate(
    Json(body): Json<ValidatorBody>,
) -> Result<Json<ValidatorResponse>, ApiRejection> {
    let raw: Vec<RawTransaction> = body.transactions.into_iter().map(Into::into).collect();
    let report = validator::validate_transactions(body.wage, body.max_investment, &raw)?;
    Ok(Json(report.into()))
}

pub(super) async fn filter(
    Json(body): Json<FilterBody>,
) -> Result<Json<FilterResponse>, ApiRejection> {
    let (q, p, k) = period_sets(body.q, body.p, body.k)?;
    let raw: Vec<RawTransaction> = body.transactions.into_iter().map(Into::into).collect();
    let report = filter::filter_transactions(&raw, &q, &p, &k);
    Ok(Json(report.into()))
}

async fn project_returns(
    instrument: Instrument,
    body: ReturnsBody,
) -> Result<Json<ReturnsResponse>, ApiRejection> {
    let (q, p, k) = period_sets(body.q, body.p, body.k)?;
    let raw: Vec<RawTransaction> = body.transactions.into_iter().map(Into::into).collect();
    let projection = returns::calculate_returns(
        instrument,
        body.age,
        body.wage,
        body.inflation,
        &raw,
        &q,
        &p,
        &k,
    )?;
    Ok(Json(projection.into()))
}

pub(super) async fn returns_nps(
    Json(body): Json<ReturnsBody>,
) -> Result<Json<ReturnsResponse>, ApiRejection> {
    project_returns(Instrument::Nps, body).await
}

pub(super) async fn returns_index(
    Json(body): Json<ReturnsBody>,
) -> Result<Json<ReturnsResponse>, ApiRejection> {
    project_returns(Instrument::Index, body).await
}

pub(super) async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub(super) async fn performance(State(state): State<AppState>) -> Json<PerformanceBody> {
    Json(PerformanceBody {
        time: format!("{:.3} ms", state.clock.last_ms()),
        memory: format!("{:.2} MB", metrics::resident_memory_mb()),
        threads: num_cpus::get(),
    })
}
