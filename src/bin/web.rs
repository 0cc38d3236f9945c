//! Single binary web server exposing the championship engine over REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use championship_engine::{
    build_bracket, complete_group_stage, create_group_stage, generate_report, group_standings,
    record_bracket_result, record_group_result, team_summary, ChampionshipError, Competitor,
    GroupStage, KnockoutBracket,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Everything the host stores for one championship. The engine only ever sees the
/// stage or bracket it is asked to work on.
#[derive(Serialize)]
struct Championship {
    id: Uuid,
    name: String,
    roster: Vec<Competitor>,
    group_stage: Option<GroupStage>,
    bracket: Option<KnockoutBracket>,
}

/// Per-championship entry: data + last activity time (for auto-cleanup).
struct ChampionshipEntry {
    championship: Championship,
    last_activity: Instant,
}

/// In-memory state. The write lock serializes every mutation of a championship.
type AppState = Data<RwLock<HashMap<Uuid, ChampionshipEntry>>>;

/// Inactivity threshold: championships not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Host settings read from the environment.
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateChampionshipBody {
    name: String,
    #[serde(default)]
    competitors: Vec<Competitor>,
}

#[derive(Deserialize)]
struct CreateGroupStageBody {
    #[serde(default = "default_stage_name")]
    name: String,
    group_count: usize,
}

fn default_stage_name() -> String {
    "Group stage".to_string()
}

#[derive(Deserialize)]
struct CreateBracketBody {
    #[serde(default = "default_bracket_name")]
    name: String,
}

fn default_bracket_name() -> String {
    "Knockout stage".to_string()
}

/// Goals arrive as typed by the user: JSON numbers or strings.
#[derive(Deserialize)]
struct MatchResultBody {
    home_goals: Value,
    away_goals: Value,
}

impl MatchResultBody {
    fn goals(&self) -> Result<(i64, i64), ChampionshipError> {
        Ok((
            raw_goals(&self.home_goals, "home")?,
            raw_goals(&self.away_goals, "away")?,
        ))
    }
}

fn raw_goals(value: &Value, side: &str) -> Result<i64, ChampionshipError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ChampionshipError::InvalidInput(format!("{side} goals must be an integer, got {value}"))
    })
}

#[derive(Deserialize)]
struct ChampionshipPath {
    id: Uuid,
}

#[derive(Deserialize)]
struct GroupMatchPath {
    id: Uuid,
    group_id: String,
    match_id: String,
}

#[derive(Deserialize)]
struct GroupPath {
    id: Uuid,
    group_id: String,
}

#[derive(Deserialize)]
struct TeamPath {
    id: Uuid,
    team_id: String,
}

#[derive(Deserialize)]
struct BracketMatchPath {
    id: Uuid,
    match_id: String,
}

fn error_response(e: &ChampionshipError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        ChampionshipError::NotFound { .. } => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn no_group_stage() -> ChampionshipError {
    ChampionshipError::InvalidInput("Create the group stage first".to_string())
}

/// Lock the store, touch the entry and run `f` on it. Errors become 400/404 responses.
fn with_championship<F>(state: &AppState, id: Uuid, f: F) -> HttpResponse
where
    F: FnOnce(&mut Championship) -> Result<HttpResponse, ChampionshipError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No championship" }))
        }
    };
    entry.last_activity = Instant::now();
    match f(&mut entry.championship) {
        Ok(response) => response,
        Err(e) => {
            log::debug!("Championship {}: {}", id, e);
            error_response(&e)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "championship-engine",
    })
}

/// Create a championship from a roster (returns it with id).
#[post("/api/championships")]
async fn api_create_championship(
    state: AppState,
    body: Json<CreateChampionshipBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let championship = Championship {
        id: Uuid::new_v4(),
        name: body.name.trim().to_string(),
        roster: body.competitors,
        group_stage: None,
        bracket: None,
    };
    let id = championship.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!(
        "Created championship {} with {} competitor(s)",
        id,
        championship.roster.len()
    );
    let entry = g.entry(id).or_insert(ChampionshipEntry {
        championship,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(&entry.championship)
}

#[get("/api/championships/{id}")]
async fn api_get_championship(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    with_championship(&state, path.id, |c| Ok(HttpResponse::Ok().json(&*c)))
}

/// Split the roster into groups. Replaces any previous stage and bracket.
#[post("/api/championships/{id}/group-stage")]
async fn api_create_group_stage(
    state: AppState,
    path: Path<ChampionshipPath>,
    body: Json<CreateGroupStageBody>,
) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let stage = create_group_stage(body.name.trim(), &c.roster, body.group_count)?;
        c.group_stage = Some(stage);
        c.bracket = None;
        Ok(HttpResponse::Ok().json(&c.group_stage))
    })
}

#[put("/api/championships/{id}/groups/{group_id}/matches/{match_id}")]
async fn api_record_group_result(
    state: AppState,
    path: Path<GroupMatchPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let stage = c.group_stage.as_mut().ok_or_else(no_group_stage)?;
        let (home, away) = body.goals()?;
        let updated = record_group_result(stage, &path.group_id, &path.match_id, home, away)?;
        Ok(HttpResponse::Ok().json(updated))
    })
}

#[get("/api/championships/{id}/groups/{group_id}/standings")]
async fn api_group_standings(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let stage = c.group_stage.as_ref().ok_or_else(no_group_stage)?;
        Ok(HttpResponse::Ok().json(group_standings(stage, &path.group_id)?))
    })
}

#[post("/api/championships/{id}/group-stage/complete")]
async fn api_complete_group_stage(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let stage = c.group_stage.as_mut().ok_or_else(no_group_stage)?;
        complete_group_stage(stage);
        Ok(HttpResponse::Ok().json(&*stage))
    })
}

#[get("/api/championships/{id}/teams/{team_id}")]
async fn api_team_summary(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let stage = c.group_stage.as_ref().ok_or_else(no_group_stage)?;
        Ok(HttpResponse::Ok().json(team_summary(stage, &path.team_id)?))
    })
}

/// Build the knockout bracket from the current group tables.
#[post("/api/championships/{id}/bracket")]
async fn api_build_bracket(
    state: AppState,
    path: Path<ChampionshipPath>,
    body: Json<CreateBracketBody>,
) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let stage = c.group_stage.as_ref().ok_or_else(no_group_stage)?;
        let bracket = build_bracket(body.name.trim(), &stage.groups)?;
        c.bracket = Some(bracket);
        Ok(HttpResponse::Ok().json(&c.bracket))
    })
}

#[put("/api/championships/{id}/bracket/matches/{match_id}")]
async fn api_record_bracket_result(
    state: AppState,
    path: Path<BracketMatchPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let bracket = c.bracket.as_mut().ok_or_else(|| {
            ChampionshipError::InvalidInput("Build the bracket first".to_string())
        })?;
        let (home, away) = body.goals()?;
        let updated = record_bracket_result(bracket, &path.match_id, home, away)?;
        Ok(HttpResponse::Ok().json(updated))
    })
}

#[get("/api/championships/{id}/report")]
async fn api_report(state: AppState, path: Path<ChampionshipPath>) -> HttpResponse {
    with_championship(&state, path.id, |c| {
        let report = generate_report(
            &c.name,
            c.roster.len(),
            c.group_stage.as_ref(),
            c.bracket.as_ref(),
        );
        Ok(HttpResponse::Ok().json(report))
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<Uuid, ChampionshipEntry>::new()));

    // Background task: every 30 minutes, remove championships inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive championship(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_championship)
            .service(api_get_championship)
            .service(api_create_group_stage)
            .service(api_record_group_result)
            .service(api_group_standings)
            .service(api_complete_group_stage)
            .service(api_team_summary)
            .service(api_build_bracket)
            .service(api_record_bracket_result)
            .service(api_report)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
