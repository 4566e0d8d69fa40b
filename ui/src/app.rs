use std::time::Duration;

use log::error;
use roster_business::{UserListState, user_list};

use crate::{state::State, widgets};

/// Repaint cadence while a page is loading, so skeleton rows animate and the
/// result shows up without waiting for input.
const LOADING_REPAINT: Duration = Duration::from_millis(50);

pub struct RosterApp {
    /// Public so integration tests can inspect it through the harness.
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results from finished commands before rendering.
        self.state.ctx.sync_updates();

        if let Err(err) = user_list::ensure_loaded(&mut self.state.ctx) {
            error!("Initial page load failed: {err}");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::user_list_page(&mut self.state.ctx, ui);
        });

        if self.state.ctx.state::<UserListState>().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }
}
