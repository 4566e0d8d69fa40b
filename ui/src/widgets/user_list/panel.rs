//! Main panel for the user directory.

use chrono::Local;
use egui::{
    Align, Button, Frame, Layout, Margin, Response, RichText, ScrollArea, Stroke, TextEdit, Ui,
};
use egui_extras::TableBuilder;
use log::{error, info};
use roster_business::{TableBody, UserListState, user_list};
use roster_states::StateCtx;

use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::{render_skeleton_rows, render_user_rows};
use crate::utils::colors::{COLOR_RED, TABLE_BORDER};

/// Interactions collected while rendering the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListAction {
    Prev,
    Next,
    ToggleSort,
    Retry,
    Search(String),
}

/// Displays the user directory: search box, table and pager.
pub fn user_list_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut actions = Vec::new();

    let response = ui.vertical(|ui| {
        let state = state_ctx.state::<UserListState>();

        ui.heading("List Users");
        ui.add_space(8.0);

        let mut search = state.search().to_owned();
        let edited = ui
            .add(
                TextEdit::singleline(&mut search)
                    .hint_text("Search name or username")
                    .desired_width(300.0),
            )
            .changed();
        if edited {
            actions.push(UserListAction::Search(search));
        }
        ui.add_space(8.0);

        if let Some(message) = state.error() {
            ui.horizontal(|ui| {
                ui.colored_label(COLOR_RED, format!("Error: {message}"));
                if ui.button("Retry").clicked() {
                    actions.push(UserListAction::Retry);
                }
            });
            ui.add_space(4.0);
        }

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::horizontal().show(ui, |ui| {
                    render_table(ui, state, &mut actions);
                });
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(state.can_prev(), Button::new("Prev")).clicked() {
                actions.push(UserListAction::Prev);
            }
            ui.label(state.page_label());
            if ui.add_enabled(state.can_next(), Button::new("Next")).clicked() {
                actions.push(UserListAction::Next);
            }
            if let Some(fetched_at) = state.last_fetch() {
                let local = fetched_at.with_timezone(&Local);
                ui.add_space(12.0);
                ui.weak(format!("Updated {}", local.format("%H:%M:%S")));
            }
        });
    });

    for action in actions {
        apply_action(state_ctx, action);
    }

    response.response
}

fn render_table(ui: &mut Ui, state: &UserListState, actions: &mut Vec<UserListAction>) {
    let body = state.table();

    let mut builder = TableBuilder::new(ui)
        .id_salt("user_list_table")
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if render_table_header(&mut header, state.sort()) {
                actions.push(UserListAction::ToggleSort);
            }
        })
        .body(|mut table| match &body {
            TableBody::Skeleton { rows } => render_skeleton_rows(&mut table, *rows),
            TableBody::Rows(rows) => render_user_rows(&mut table, rows),
            TableBody::Empty => {
                table.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new("No users match").weak());
                    });
                });
            }
            // The banner above carries the message and the retry button.
            TableBody::Failed { .. } => {}
        });
}

/// Applies one collected interaction; page moves and retries issue the fetch.
pub fn apply_action(state_ctx: &mut StateCtx, action: UserListAction) {
    let result = match action {
        UserListAction::Prev => user_list::prev_page(state_ctx).map(|_| ()),
        UserListAction::Next => user_list::next_page(state_ctx).map(|_| ()),
        UserListAction::Retry => {
            info!("Retrying user page fetch");
            user_list::retry(state_ctx).map(|_| ())
        }
        UserListAction::ToggleSort => user_list::toggle_sort(state_ctx).map(|_| ()),
        UserListAction::Search(query) => user_list::set_search(state_ctx, query),
    };
    if let Err(err) = result {
        error!("User list action failed: {err}");
    }
}
