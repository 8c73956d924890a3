use anyhow::{Context, Result};
use serde_json::json;

use telecomdash::logging::{log, obj, v_str, Domain, Level};
use telecomdash::state::{Config, Session};

/// Prints the dashboard snapshot for the configured selectors as JSON.
///
/// An optional first argument selects a project for the detail panel.
fn main() -> Result<()> {
    let cfg = Config::from_env();
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[("config", serde_json::to_value(&cfg)?)]),
    );

    let session = Session::new(cfg);
    let view = session.default_view();

    let detail = match std::env::args().nth(1) {
        Some(id) => {
            let detail = session.detail(&view.criteria, &id);
            if detail.is_none() {
                log(
                    Level::Warn,
                    Domain::Session,
                    "unknown_project",
                    obj(&[("project_id", v_str(&id))]),
                );
            }
            detail
        }
        None => None,
    };

    let payload = json!({
        "session_id": session.id(),
        "view": view,
        "detail": detail,
    });
    let out = serde_json::to_string_pretty(&payload).context("serializing dashboard view")?;
    println!("{}", out);
    Ok(())
}
