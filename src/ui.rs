/// Overlay host: the handful of named UI elements around the play field.
///
/// `sync_ui` derives everything from the `GameState`, so the simulation never
/// touches the host directly.
use crate::compute::score_text;
use crate::entities::{GameState, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiElement {
    Score,
    GameOver,
    StartMenu,
    Instructions,
}

/// A modal dialog with a single acknowledgement control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modal {
    pub title: &'static str,
    /// One entry per printed line.
    pub body: &'static [&'static str],
    pub action: &'static str,
}

pub const MILESTONE_MODAL: Modal = Modal {
    title: "HAHAHA!",
    body: &["INTERRUPTED YOUR PLAY.", "I LOVE YOU SO MUCH \u{1f496}"],
    action: "Continue [Enter]",
};

pub trait UiHost {
    fn set_visible(&mut self, element: UiElement, visible: bool);
    fn set_score_text(&mut self, text: &str);
    fn show_modal(&mut self, modal: &Modal);
    fn hide_modal(&mut self);
}

/// Host-side memory between syncs, so the modal is inserted and removed
/// exactly once per pause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiSync {
    pub modal_open: bool,
}

/// Score readout, tagged while the bull power-up is running.
pub fn hud_text(state: &GameState) -> String {
    if state.bull.active {
        format!("{} CHEAT ON", score_text(state))
    } else {
        score_text(state)
    }
}

pub fn sync_ui<H: UiHost + ?Sized>(host: &mut H, state: &GameState, sync: &mut UiSync) {
    let started = state.status != GameStatus::Menu;

    host.set_visible(UiElement::StartMenu, !started);
    host.set_visible(UiElement::Instructions, started);
    host.set_visible(UiElement::Score, started);
    host.set_visible(UiElement::GameOver, state.status == GameStatus::GameOver);
    host.set_score_text(&hud_text(state));

    if state.paused && !sync.modal_open {
        host.show_modal(&MILESTONE_MODAL);
        sync.modal_open = true;
    } else if !state.paused && sync.modal_open {
        host.hide_modal();
        sync.modal_open = false;
    }
}
