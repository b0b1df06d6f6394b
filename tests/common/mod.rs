//! Shared test fixtures: a small loading screen store.

#![allow(dead_code, unused_imports)]

use mmvi::{Dispatch, Emitter, Intent, State, StateStream, Store, StoreError};
use std::time::Duration;

pub const WAIT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Idle,
    Loading,
    Loaded(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Idle,
    Loading,
    Loaded,
}

impl State for Screen {
    type Kind = ScreenKind;

    fn kind(&self) -> ScreenKind {
        match self {
            Screen::Idle => ScreenKind::Idle,
            Screen::Loading => ScreenKind::Loading,
            Screen::Loaded(_) => ScreenKind::Loaded,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Load,
    Refresh,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Load,
    Refresh,
    Reset,
}

impl Intent for Action {
    type Kind = ActionKind;

    fn kind(&self) -> ActionKind {
        match self {
            Action::Load => ActionKind::Load,
            Action::Refresh => ActionKind::Refresh,
            Action::Reset => ActionKind::Reset,
        }
    }
}

pub fn loaded(data: &str) -> Screen {
    Screen::Loaded(data.to_string())
}

pub async fn load(_: Screen, _: Action, _: Dispatch<Action>, emitter: Emitter<Screen>) {
    emitter.emit(Screen::Loading);
    tokio::task::yield_now().await;
    emitter.emit(loaded("data"));
}

pub async fn refresh(_: Screen, _: Action, _: Dispatch<Action>, emitter: Emitter<Screen>) {
    emitter.emit(Screen::Loading);
    tokio::task::yield_now().await;
    emitter.emit(loaded("new data"));
}

/// Idle --Load--> Loading, Loaded("data"); Loaded --Refresh--> Loading, Loaded("new data").
pub fn screen_store() -> Result<Store<Screen, Action>, StoreError> {
    Store::configure(|b| {
        b.start_with(Screen::Idle)
            .bind(ScreenKind::Idle, ActionKind::Load, load)?
            .bind(ScreenKind::Loaded, ActionKind::Refresh, refresh)
    })
}

/// Next state from the stream, failing the test if none arrives in time.
pub async fn next_state<S>(stream: &mut StateStream<S>) -> S {
    tokio::time::timeout(WAIT, stream.next())
        .await
        .expect("timed out waiting for state")
        .expect("state stream ended")
}

/// Assert nothing further is committed within a short grace period.
pub async fn assert_quiet<S: std::fmt::Debug>(stream: &mut StateStream<S>) {
    tokio::time::sleep(Duration::from_millis(50)).await;
    if let Some(state) = stream.try_next() {
        panic!("unexpected state committed: {:?}", state);
    }
}
