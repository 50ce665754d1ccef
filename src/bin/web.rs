//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! INACTIVITY_TIMEOUT_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use pubg_tournament_web::{
    clear_match_results, replace_match_results, set_match_result, split_columns,
    standings_to_csv, tournament_standings, DayId, MatchId, ResultEntry, ServerConfig,
    StandingsScope, TeamId, Tournament, TournamentError, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Idle entries are removed by the cleanup task.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct TournamentBody {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct TeamBody {
    name: String,
    #[serde(default)]
    flag: Option<String>,
    #[serde(default)]
    logo: Option<String>,
}

#[derive(Deserialize)]
struct DayBody {
    name: String,
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct MatchBody {
    name: String,
}

#[derive(Deserialize)]
struct ResultBody {
    #[serde(default)]
    placement: u32,
    #[serde(default)]
    kills: u32,
}

#[derive(Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ScopeKind {
    #[default]
    Overall,
    Day,
    Match,
}

/// Query string for standings: `?scope=overall`, `?scope=day&id=..`, `?scope=match&id=..`.
#[derive(Deserialize)]
struct StandingsQuery {
    #[serde(default)]
    scope: ScopeKind,
    #[serde(default)]
    id: Option<uuid::Uuid>,
}

impl StandingsQuery {
    fn to_scope(&self) -> Option<StandingsScope> {
        match self.scope {
            ScopeKind::Overall => Some(StandingsScope::Overall),
            ScopeKind::Day => self.id.map(StandingsScope::Day),
            ScopeKind::Match => self.id.map(StandingsScope::Match),
        }
    }
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: TeamId,
}

#[derive(Deserialize)]
struct TournamentDayPath {
    id: TournamentId,
    day_id: DayId,
}

#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct MatchTeamPath {
    id: TournamentId,
    match_id: MatchId,
    team_id: TeamId,
}

fn bad_request(e: &dyn std::fmt::Display) -> HttpResponse {
    log::warn!("Rejected request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `op` against one tournament under the write lock, refreshing its last_activity.
/// Err carries the response to send when the lock is poisoned or the id is unknown.
fn with_tournament<T>(
    state: &AppState,
    id: TournamentId,
    op: impl FnOnce(&mut Tournament) -> T,
) -> Result<T, HttpResponse> {
    let mut g = state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    let entry = g.get_mut(&id).ok_or_else(|| {
        HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
    })?;
    entry.last_activity = Instant::now();
    Ok(op(&mut entry.tournament))
}

/// Apply a mutation and answer with the updated tournament (or 400 with the error).
fn apply(
    state: &AppState,
    id: TournamentId,
    op: impl FnOnce(&mut Tournament) -> Result<(), TournamentError>,
) -> HttpResponse {
    with_tournament(state, id, |t| match op(&mut *t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => bad_request(&e),
    })
    .unwrap_or_else(|resp| resp)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pubg-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<TournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let tournament = match Tournament::create(&body.name, body.description) {
        Ok(t) => t,
        Err(e) => return bad_request(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({})", tournament.name, tournament.id);
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(&*t)).unwrap_or_else(|resp| resp)
}

/// Update tournament name and description.
#[put("/api/tournaments/{id}")]
async fn api_update_tournament(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TournamentBody>,
) -> HttpResponse {
    let body = body.into_inner();
    apply(&state, path.id, |t| t.update_details(&body.name, body.description))
}

/// Register a team.
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<TeamBody>) -> HttpResponse {
    let body = body.into_inner();
    apply(&state, path.id, |t| {
        t.add_team(&body.name, body.flag, body.logo).map(|_| ())
    })
}

/// Update a team's name, flag and logo.
#[put("/api/tournaments/{id}/teams/{team_id}")]
async fn api_update_team(
    state: AppState,
    path: Path<TournamentTeamPath>,
    body: Json<TeamBody>,
) -> HttpResponse {
    let body = body.into_inner();
    apply(&state, path.id, |t| {
        t.update_team(path.team_id, &body.name, body.flag, body.logo)
    })
}

/// Remove a team and its results.
#[delete("/api/tournaments/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    apply(&state, path.id, |t| t.remove_team(path.team_id))
}

/// Add a match day.
#[post("/api/tournaments/{id}/days")]
async fn api_add_day(state: AppState, path: Path<TournamentPath>, body: Json<DayBody>) -> HttpResponse {
    apply(&state, path.id, |t| t.add_day(&body.name, body.date).map(|_| ()))
}

/// Rename a day or change its date.
#[put("/api/tournaments/{id}/days/{day_id}")]
async fn api_rename_day(
    state: AppState,
    path: Path<TournamentDayPath>,
    body: Json<DayBody>,
) -> HttpResponse {
    apply(&state, path.id, |t| t.rename_day(path.day_id, &body.name, body.date))
}

/// Remove a day with all its matches.
#[delete("/api/tournaments/{id}/days/{day_id}")]
async fn api_remove_day(state: AppState, path: Path<TournamentDayPath>) -> HttpResponse {
    apply(&state, path.id, |t| t.remove_day(path.day_id))
}

/// Schedule a match on a day.
#[post("/api/tournaments/{id}/days/{day_id}/matches")]
async fn api_add_match(
    state: AppState,
    path: Path<TournamentDayPath>,
    body: Json<MatchBody>,
) -> HttpResponse {
    apply(&state, path.id, |t| t.add_match(path.day_id, &body.name).map(|_| ()))
}

#[put("/api/tournaments/{id}/matches/{match_id}")]
async fn api_rename_match(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<MatchBody>,
) -> HttpResponse {
    apply(&state, path.id, |t| t.rename_match(path.match_id, &body.name))
}

#[delete("/api/tournaments/{id}/matches/{match_id}")]
async fn api_remove_match(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    apply(&state, path.id, |t| t.remove_match(path.match_id))
}

/// Save all results of a match at once (replaces whatever was there).
#[put("/api/tournaments/{id}/matches/{match_id}/results")]
async fn api_replace_results(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<Vec<ResultEntry>>,
) -> HttpResponse {
    apply(&state, path.id, |t| replace_match_results(t, path.match_id, &body))
}

/// Record one team's placement and kills in a match.
#[put("/api/tournaments/{id}/matches/{match_id}/results/{team_id}")]
async fn api_set_result(
    state: AppState,
    path: Path<MatchTeamPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    apply(&state, path.id, |t| {
        set_match_result(t, path.match_id, path.team_id, body.placement, body.kills).map(|_| ())
    })
}

#[delete("/api/tournaments/{id}/matches/{match_id}/results")]
async fn api_clear_results(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    apply(&state, path.id, |t| clear_match_results(t, path.match_id))
}

/// Ranked standings for a scope, plus the two banner columns.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let Some(scope) = query.to_scope() else {
        return bad_request(&"Missing id for scope");
    };
    with_tournament(&state, path.id, |t| match tournament_standings(t, scope) {
        Ok(standings) => {
            let (left, right) = split_columns(&standings);
            HttpResponse::Ok().json(serde_json::json!({
                "scope": scope,
                "standings": standings,
                "columns": [left, right],
            }))
        }
        Err(e) => bad_request(&e),
    })
    .unwrap_or_else(|resp| resp)
}

/// Standings for a scope as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let Some(scope) = query.to_scope() else {
        return bad_request(&"Missing id for scope");
    };
    with_tournament(&state, path.id, |t| {
        let standings = match tournament_standings(t, scope) {
            Ok(s) => s,
            Err(e) => return bad_request(&e),
        };
        match standings_to_csv(&standings) {
            Ok(csv) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header(("Content-Disposition", "attachment; filename=\"standings.csv\""))
                .body(csv),
            Err(e) => {
                log::error!("Standings export failed for {}: {}", t.id, e);
                HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    })
    .unwrap_or_else(|resp| resp)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = config.bind_addr();
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: periodically remove tournaments idle past the timeout
    let state_cleanup = state.clone();
    let cleanup_interval = config.cleanup_interval;
    let inactivity_timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive tournament(s) (no activity for {}h)",
                    removed,
                    inactivity_timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_update_tournament)
            .service(api_add_team)
            .service(api_update_team)
            .service(api_remove_team)
            .service(api_add_day)
            .service(api_rename_day)
            .service(api_remove_day)
            .service(api_add_match)
            .service(api_rename_match)
            .service(api_remove_match)
            .service(api_replace_results)
            .service(api_set_result)
            .service(api_clear_results)
            .service(api_standings_csv)
            .service(api_standings)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
