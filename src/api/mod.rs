use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::chart::{ChartSpec, line_chart};
use crate::core::{
    EtfInputs, EtfResult, FireInputs, FireOutcome, FireResult, INSTRUMENTS, Instrument,
    TrajectoryPoint, find_instrument, run_etf_simulation, run_fire_simulation,
};
use crate::field::{ETF_FIELDS, FIRE_FIELDS, FieldSpec};
use crate::format::{KO_KR, LocaleSpec, format_currency, format_percent};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// Display locale for every rendered amount; the core stays locale-agnostic.
const APP_LOCALE: LocaleSpec = KO_KR;

#[derive(Args, Debug, Clone)]
pub struct FireArgs {
    #[arg(long, default_value_t = 25.0)]
    current_age: f64,
    #[arg(long, default_value_t = 4_000_000.0)]
    monthly_income: f64,
    #[arg(
        long,
        default_value_t = 30.0,
        help = "Share of monthly income saved, in percent"
    )]
    saving_rate: f64,
    #[arg(long, default_value_t = 1_300_000_000.0)]
    target_assets: f64,
    #[arg(long, default_value_t = 7.0, help = "Expected annual return in percent")]
    annual_return: f64,
}

#[derive(Args, Debug, Clone)]
pub struct EtfArgs {
    #[arg(long, help = "Instrument symbol from the catalog, e.g. SPY")]
    symbol: String,
    #[arg(long, default_value_t = 13_000_000.0)]
    initial_amount: f64,
    #[arg(long, default_value_t = 650_000.0)]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 20, help = "Investment horizon in years (1-50)")]
    years: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FirePayload {
    current_age: Option<f64>,
    monthly_income: Option<f64>,
    saving_rate: Option<f64>,
    target_assets: Option<f64>,
    annual_return: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EtfPayload {
    symbol: Option<String>,
    initial_amount: Option<f64>,
    monthly_contribution: Option<f64>,
    investment_years: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FireSummary {
    monthly_saving: String,
    annual_saving: String,
    target_assets: String,
    total_contributed: String,
    total_interest_earned: String,
    annual_return: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FireResponse {
    outcome: FireOutcome,
    fire_age: u32,
    years_to_goal: f64,
    monthly_saving: f64,
    total_contributed: f64,
    total_interest_earned: f64,
    trajectory: Vec<TrajectoryPoint>,
    summary: FireSummary,
    chart: ChartSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EtfSummary {
    final_amount: String,
    total_invested: String,
    total_return: String,
    cagr: String,
    average_annual_return: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EtfResponse {
    instrument: Instrument,
    final_amount: f64,
    total_invested: f64,
    total_return: f64,
    cagr: Option<f64>,
    trajectory: Vec<TrajectoryPoint>,
    summary: EtfSummary,
    chart: ChartSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldsResponse {
    fire: &'static [FieldSpec],
    etf: &'static [FieldSpec],
    locale: LocaleSpec,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn field_default(fields: &'static [FieldSpec], id: &str) -> f64 {
    fields
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.default)
        .expect("field id is in the static table")
}

fn validate_fire_inputs(inputs: &FireInputs) -> Result<(), String> {
    for (name, value) in [
        ("currentAge", inputs.current_age),
        ("monthlyIncome", inputs.monthly_income),
        ("savingRate", inputs.saving_rate),
        ("targetAssets", inputs.target_assets),
        ("annualReturn", inputs.annual_return),
    ] {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }
    if !(0.0..=100.0).contains(&inputs.current_age) {
        return Err("currentAge must be between 0 and 100".to_string());
    }
    if inputs.monthly_income < 0.0 {
        return Err("monthlyIncome must be >= 0".to_string());
    }
    if !(0.0..=1.0).contains(&inputs.saving_rate) {
        return Err("savingRate must be between 0 and 1".to_string());
    }
    if inputs.target_assets < 0.0 {
        return Err("targetAssets must be >= 0".to_string());
    }
    if !(-1.0..=1.0).contains(&inputs.annual_return) {
        return Err("annualReturn must be between -1 and 1".to_string());
    }
    Ok(())
}

fn validate_etf_inputs(inputs: &EtfInputs) -> Result<(), String> {
    for (name, value) in [
        ("initialAmount", inputs.initial_amount),
        ("monthlyContribution", inputs.monthly_contribution),
        ("annualReturn", inputs.annual_return),
    ] {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }
    if inputs.initial_amount < 0.0 {
        return Err("initialAmount must be >= 0".to_string());
    }
    if inputs.monthly_contribution < 0.0 {
        return Err("monthlyContribution must be >= 0".to_string());
    }
    if !(1..=50).contains(&inputs.investment_years) {
        return Err("investmentYears must be between 1 and 50".to_string());
    }
    if !(-1.0..=1.0).contains(&inputs.annual_return) {
        return Err("annualReturn must be between -1 and 1".to_string());
    }
    Ok(())
}

/// CLI rates arrive in percent and are rescaled to the fractions the
/// simulator stores, mirroring the percentage field's inverse transform.
fn build_fire_inputs(args: &FireArgs) -> Result<FireInputs, String> {
    let inputs = FireInputs {
        current_age: args.current_age,
        monthly_income: args.monthly_income,
        saving_rate: args.saving_rate / 100.0,
        target_assets: args.target_assets,
        annual_return: args.annual_return / 100.0,
    };
    validate_fire_inputs(&inputs)?;
    Ok(inputs)
}

fn build_etf_inputs(args: &EtfArgs) -> Result<(EtfInputs, &'static Instrument), String> {
    let instrument = find_instrument(&args.symbol)
        .ok_or_else(|| format!("unknown instrument symbol: {}", args.symbol))?;
    let inputs = EtfInputs {
        initial_amount: args.initial_amount,
        monthly_contribution: args.monthly_contribution,
        investment_years: args.years,
        annual_return: instrument.average_annual_return,
    };
    validate_etf_inputs(&inputs)?;
    Ok((inputs, instrument))
}

/// JSON payloads carry stored values (rates as fractions); missing fields
/// fall back to the form field defaults.
fn fire_inputs_from_payload(payload: FirePayload) -> Result<FireInputs, String> {
    let inputs = FireInputs {
        current_age: payload
            .current_age
            .unwrap_or_else(|| field_default(&FIRE_FIELDS, "currentAge")),
        monthly_income: payload
            .monthly_income
            .unwrap_or_else(|| field_default(&FIRE_FIELDS, "monthlyIncome")),
        saving_rate: payload
            .saving_rate
            .unwrap_or_else(|| field_default(&FIRE_FIELDS, "savingRate")),
        target_assets: payload
            .target_assets
            .unwrap_or_else(|| field_default(&FIRE_FIELDS, "targetAssets")),
        annual_return: payload
            .annual_return
            .unwrap_or_else(|| field_default(&FIRE_FIELDS, "annualReturn")),
    };
    validate_fire_inputs(&inputs)?;
    Ok(inputs)
}

fn etf_inputs_from_payload(
    payload: EtfPayload,
) -> Result<(EtfInputs, &'static Instrument), String> {
    let Some(symbol) = payload.symbol else {
        return Err("symbol is required".to_string());
    };
    let instrument =
        find_instrument(&symbol).ok_or_else(|| format!("unknown instrument symbol: {symbol}"))?;
    let inputs = EtfInputs {
        initial_amount: payload
            .initial_amount
            .unwrap_or_else(|| field_default(&ETF_FIELDS, "initialAmount")),
        monthly_contribution: payload
            .monthly_contribution
            .unwrap_or_else(|| field_default(&ETF_FIELDS, "monthlyContribution")),
        investment_years: payload
            .investment_years
            .unwrap_or_else(|| field_default(&ETF_FIELDS, "investmentYears") as u32),
        annual_return: instrument.average_annual_return,
    };
    validate_etf_inputs(&inputs)?;
    Ok((inputs, instrument))
}

fn build_fire_response(inputs: &FireInputs, result: FireResult) -> FireResponse {
    let chart = line_chart(
        &result.trajectory,
        "Projected asset growth",
        "Age",
        &format!("Assets ({})", APP_LOCALE.currency_symbol),
        &APP_LOCALE,
    );
    let summary = FireSummary {
        monthly_saving: format_currency(result.monthly_saving, &APP_LOCALE),
        annual_saving: format_currency(result.monthly_saving * 12.0, &APP_LOCALE),
        target_assets: format_currency(inputs.target_assets, &APP_LOCALE),
        total_contributed: format_currency(result.total_contributed, &APP_LOCALE),
        total_interest_earned: format_currency(result.total_interest_earned, &APP_LOCALE),
        annual_return: format_percent(inputs.annual_return),
    };
    FireResponse {
        outcome: result.outcome,
        fire_age: result.fire_age,
        years_to_goal: result.years_to_goal,
        monthly_saving: result.monthly_saving,
        total_contributed: result.total_contributed,
        total_interest_earned: result.total_interest_earned,
        trajectory: result.trajectory,
        summary,
        chart,
    }
}

fn build_etf_response(instrument: &'static Instrument, result: EtfResult) -> EtfResponse {
    let chart = line_chart(
        &result.trajectory,
        &format!("{} investment growth", instrument.name),
        "Year",
        &format!("Assets ({})", APP_LOCALE.currency_symbol),
        &APP_LOCALE,
    );
    let summary = EtfSummary {
        final_amount: format_currency(result.final_amount, &APP_LOCALE),
        total_invested: format_currency(result.total_invested, &APP_LOCALE),
        total_return: format_currency(result.total_return, &APP_LOCALE),
        cagr: result.cagr.map_or_else(|| "—".to_string(), format_percent),
        average_annual_return: format_percent(instrument.average_annual_return),
    };
    EtfResponse {
        instrument: *instrument,
        final_amount: result.final_amount,
        total_invested: result.total_invested,
        total_return: result.total_return,
        cagr: result.cagr,
        trajectory: result.trajectory,
        summary,
        chart,
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/instruments", get(instruments_handler))
        .route("/api/fields", get(fields_handler))
        .route(
            "/api/simulate/fire",
            get(fire_get_handler).post(fire_post_handler),
        )
        .route(
            "/api/simulate/etf",
            get(etf_get_handler).post(etf_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("firesim HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn instruments_handler() -> Response {
    json_response(StatusCode::OK, INSTRUMENTS)
}

async fn fields_handler() -> Response {
    json_response(
        StatusCode::OK,
        FieldsResponse {
            fire: &FIRE_FIELDS,
            etf: &ETF_FIELDS,
            locale: APP_LOCALE,
        },
    )
}

async fn fire_get_handler(Query(payload): Query<FirePayload>) -> Response {
    fire_handler_impl(payload)
}

async fn fire_post_handler(Json(payload): Json<FirePayload>) -> Response {
    fire_handler_impl(payload)
}

fn fire_handler_impl(payload: FirePayload) -> Response {
    let inputs = match fire_inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    let result = run_fire_simulation(&inputs);
    json_response(StatusCode::OK, build_fire_response(&inputs, result))
}

async fn etf_get_handler(Query(payload): Query<EtfPayload>) -> Response {
    etf_handler_impl(payload)
}

async fn etf_post_handler(Json(payload): Json<EtfPayload>) -> Response {
    etf_handler_impl(payload)
}

fn etf_handler_impl(payload: EtfPayload) -> Response {
    let (inputs, instrument) = match etf_inputs_from_payload(payload) {
        Ok(parsed) => parsed,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    let result = run_etf_simulation(&inputs);
    json_response(StatusCode::OK, build_etf_response(instrument, result))
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

pub fn run_fire_cli(args: FireArgs) -> Result<(), String> {
    let inputs = build_fire_inputs(&args)?;
    let result = run_fire_simulation(&inputs);

    println!("FIRE simulation");
    println!(
        "  Monthly saving:    {} ({} of income)",
        format_currency(result.monthly_saving, &APP_LOCALE),
        format_percent(inputs.saving_rate),
    );
    println!(
        "  Target assets:     {}",
        format_currency(inputs.target_assets, &APP_LOCALE)
    );
    println!(
        "  Annual return:     {}",
        format_percent(inputs.annual_return)
    );
    match result.outcome {
        FireOutcome::TargetReached => {
            println!("  FIRE age:          {}", result.fire_age);
            println!("  Years to goal:     {:.1}", result.years_to_goal);
        }
        FireOutcome::Unreachable => {
            println!(
                "  Goal unreachable before age {} at these parameters.",
                crate::core::FIRE_AGE_CAP
            );
        }
    }
    println!(
        "  Total contributed: {}",
        format_currency(result.total_contributed, &APP_LOCALE)
    );
    println!(
        "  Interest earned:   {}",
        format_currency(result.total_interest_earned, &APP_LOCALE)
    );
    Ok(())
}

pub fn run_etf_cli(args: EtfArgs) -> Result<(), String> {
    let (inputs, instrument) = build_etf_inputs(&args)?;
    let result = run_etf_simulation(&inputs);

    println!("{} ({})", instrument.name, instrument.symbol);
    println!("  {}", instrument.description);
    println!(
        "  Average return:  {}",
        format_percent(instrument.average_annual_return)
    );
    println!();
    for point in &result.trajectory {
        println!(
            "  Year {:>2}  {}",
            point.time as u32,
            format_currency(point.assets, &APP_LOCALE)
        );
    }
    println!();
    println!(
        "  Total invested:  {}",
        format_currency(result.total_invested, &APP_LOCALE)
    );
    println!(
        "  Total return:    {}",
        format_currency(result.total_return, &APP_LOCALE)
    );
    println!(
        "  Final amount:    {}",
        format_currency(result.final_amount, &APP_LOCALE)
    );
    match result.cagr {
        Some(cagr) => println!("  CAGR:            {}", format_percent(cagr)),
        None => println!("  CAGR:            n/a (zero initial amount)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn fire_payload_from_json(json: &str) -> Result<FireInputs, String> {
        let payload = serde_json::from_str::<FirePayload>(json)
            .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
        fire_inputs_from_payload(payload)
    }

    fn etf_payload_from_json(json: &str) -> Result<(EtfInputs, &'static Instrument), String> {
        let payload = serde_json::from_str::<EtfPayload>(json)
            .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
        etf_inputs_from_payload(payload)
    }

    #[test]
    fn fire_payload_parses_camel_case_keys() {
        let json = r#"{
          "currentAge": 30,
          "monthlyIncome": 5000000,
          "savingRate": 0.4,
          "targetAssets": 900000000,
          "annualReturn": 0.05
        }"#;
        let inputs = fire_payload_from_json(json).expect("json should parse");

        assert_approx(inputs.current_age, 30.0);
        assert_approx(inputs.monthly_income, 5_000_000.0);
        assert_approx(inputs.saving_rate, 0.4);
        assert_approx(inputs.target_assets, 900_000_000.0);
        assert_approx(inputs.annual_return, 0.05);
    }

    #[test]
    fn fire_payload_missing_fields_use_form_defaults() {
        let inputs = fire_payload_from_json("{}").expect("empty payload is valid");
        assert_approx(inputs.current_age, 25.0);
        assert_approx(inputs.monthly_income, 4_000_000.0);
        assert_approx(inputs.saving_rate, 0.3);
        assert_approx(inputs.target_assets, 1_300_000_000.0);
        assert_approx(inputs.annual_return, 0.07);
    }

    #[test]
    fn fire_payload_rejects_out_of_domain_rates() {
        let err = fire_payload_from_json(r#"{"savingRate": 1.5}"#).expect_err("must reject");
        assert!(err.contains("savingRate"));

        let err = fire_payload_from_json(r#"{"annualReturn": 2.0}"#).expect_err("must reject");
        assert!(err.contains("annualReturn"));

        let err = fire_payload_from_json(r#"{"currentAge": 150}"#).expect_err("must reject");
        assert!(err.contains("currentAge"));

        let err = fire_payload_from_json(r#"{"monthlyIncome": -1}"#).expect_err("must reject");
        assert!(err.contains("monthlyIncome"));
    }

    #[test]
    fn fire_inputs_reject_non_finite_values() {
        let inputs = FireInputs {
            current_age: 25.0,
            monthly_income: f64::NAN,
            saving_rate: 0.3,
            target_assets: 1.0,
            annual_return: 0.07,
        };
        let err = validate_fire_inputs(&inputs).expect_err("must reject NaN");
        assert!(err.contains("monthlyIncome"));
    }

    #[test]
    fn etf_payload_requires_a_known_symbol() {
        let err = etf_payload_from_json("{}").expect_err("symbol is mandatory");
        assert!(err.contains("symbol"));

        let err = etf_payload_from_json(r#"{"symbol": "XYZ"}"#).expect_err("must reject");
        assert!(err.contains("XYZ"));
    }

    #[test]
    fn etf_payload_defaults_and_instrument_rate() {
        let (inputs, instrument) =
            etf_payload_from_json(r#"{"symbol": "QQQ"}"#).expect("valid payload");
        assert_eq!(instrument.symbol, "QQQ");
        assert_approx(inputs.annual_return, 0.12);
        assert_approx(inputs.initial_amount, 13_000_000.0);
        assert_approx(inputs.monthly_contribution, 650_000.0);
        assert_eq!(inputs.investment_years, 20);
    }

    #[test]
    fn etf_payload_rejects_out_of_range_years() {
        let err = etf_payload_from_json(r#"{"symbol": "SPY", "investmentYears": 0}"#)
            .expect_err("must reject");
        assert!(err.contains("investmentYears"));

        let err = etf_payload_from_json(r#"{"symbol": "SPY", "investmentYears": 51}"#)
            .expect_err("must reject");
        assert!(err.contains("investmentYears"));
    }

    #[test]
    fn cli_rates_are_percent_denominated() {
        let args = FireArgs {
            current_age: 25.0,
            monthly_income: 4_000_000.0,
            saving_rate: 30.0,
            target_assets: 1_300_000_000.0,
            annual_return: 7.0,
        };
        let inputs = build_fire_inputs(&args).expect("valid args");
        assert_approx(inputs.saving_rate, 0.3);
        assert_approx(inputs.annual_return, 0.07);
    }

    #[test]
    fn cli_rejects_saving_rate_above_hundred_percent() {
        let args = FireArgs {
            current_age: 25.0,
            monthly_income: 4_000_000.0,
            saving_rate: 130.0,
            target_assets: 1_300_000_000.0,
            annual_return: 7.0,
        };
        let err = build_fire_inputs(&args).expect_err("must reject");
        assert!(err.contains("savingRate"));
    }

    #[test]
    fn fire_response_serialization_contains_expected_fields() {
        let inputs = fire_payload_from_json("{}").expect("valid payload");
        let result = run_fire_simulation(&inputs);
        let response = build_fire_response(&inputs, result);
        let json = serde_json::to_string(&response).expect("response should serialize");

        assert!(json.contains("\"outcome\":\"target-reached\""));
        assert!(json.contains("\"fireAge\""));
        assert!(json.contains("\"yearsToGoal\""));
        assert!(json.contains("\"totalContributed\""));
        assert!(json.contains("\"totalInterestEarned\""));
        assert!(json.contains("\"trajectory\""));
        assert!(json.contains("\"chart\""));
        assert!(json.contains("\"tickLocale\":\"ko-KR\""));
        assert!(json.contains("\"monthlySaving\":\"₩1,200,000\""));
    }

    #[test]
    fn unreachable_goal_is_reported_in_the_response() {
        let inputs =
            fire_payload_from_json(r#"{"savingRate": 0, "annualReturn": 0}"#).expect("valid");
        let result = run_fire_simulation(&inputs);
        let response = build_fire_response(&inputs, result);
        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"outcome\":\"unreachable\""));
    }

    #[test]
    fn etf_response_reports_null_cagr_for_zero_initial_amount() {
        let (inputs, instrument) =
            etf_payload_from_json(r#"{"symbol": "SPY", "initialAmount": 0}"#).expect("valid");
        let result = run_etf_simulation(&inputs);
        let response = build_etf_response(instrument, result);
        let json = serde_json::to_string(&response).expect("response should serialize");

        assert!(json.contains("\"cagr\":null"));
        assert!(json.contains("\"cagr\":\"—\""));
        assert!(json.contains("\"finalAmount\""));
        assert!(json.contains("\"totalInvested\""));
        assert!(json.contains("\"instrument\""));
        assert!(json.contains("\"averageAnnualReturn\""));
    }

    #[test]
    fn fields_response_describes_both_forms() {
        let response = FieldsResponse {
            fire: &FIRE_FIELDS,
            etf: &ETF_FIELDS,
            locale: APP_LOCALE,
        };
        let json = serde_json::to_string(&response).expect("fields should serialize");
        assert!(json.contains("\"fire\""));
        assert!(json.contains("\"etf\""));
        assert!(json.contains("\"savingRate\""));
        assert!(json.contains("\"kind\":\"percentage\""));
        assert!(json.contains("\"currencySymbol\":\"₩\""));
    }

    #[test]
    fn fire_query_payload_parses_like_json() {
        let payload: FirePayload =
            serde_urlencoded_from_str("currentAge=40&savingRate=0.5").expect("query should parse");
        let inputs = fire_inputs_from_payload(payload).expect("valid inputs");
        assert_approx(inputs.current_age, 40.0);
        assert_approx(inputs.saving_rate, 0.5);
        assert_approx(inputs.monthly_income, 4_000_000.0);
    }

    // Minimal stand-in for axum's Query extractor deserialization.
    fn serde_urlencoded_from_str(query: &str) -> Result<FirePayload, String> {
        let mut payload = FirePayload::default();
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let parsed = value.parse::<f64>().map_err(|e| e.to_string())?;
            match key {
                "currentAge" => payload.current_age = Some(parsed),
                "monthlyIncome" => payload.monthly_income = Some(parsed),
                "savingRate" => payload.saving_rate = Some(parsed),
                "targetAssets" => payload.target_assets = Some(parsed),
                "annualReturn" => payload.annual_return = Some(parsed),
                _ => return Err(format!("unexpected key {key}")),
            }
        }
        Ok(payload)
    }
}
