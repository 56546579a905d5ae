pub mod event_loop;
pub mod rendering;
pub mod state;
pub mod theme;

use anyhow::Result;

use crate::config::AppConfig;
use crate::store::FileStore;

pub fn run(cfg: AppConfig) -> Result<()> {
    let store = FileStore::new(cfg.prefs_path.clone());
    let mut app = state::TuiApp::new(store);
    app.run()
}
