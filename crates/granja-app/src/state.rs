// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::PageKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVisibility {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub page: PageKind,
    pub sidebar: SidebarVisibility,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: PageKind::Dashboard,
            sidebar: SidebarVisibility::Hidden,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextPage,
    PrevPage,
    GoToPage(PageKind),
    ToggleSidebar,
    CloseSidebar,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    PageChanged(PageKind),
    SidebarChanged(SidebarVisibility),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextPage => self.rotate_page(1),
            AppCommand::PrevPage => self.rotate_page(-1),
            AppCommand::GoToPage(page) => self.navigate(page),
            AppCommand::ToggleSidebar => {
                self.sidebar = match self.sidebar {
                    SidebarVisibility::Hidden => SidebarVisibility::Visible,
                    SidebarVisibility::Visible => SidebarVisibility::Hidden,
                };
                let label = match self.sidebar {
                    SidebarVisibility::Visible => "menu open",
                    SidebarVisibility::Hidden => "menu closed",
                };
                vec![
                    AppEvent::SidebarChanged(self.sidebar),
                    self.set_status(label),
                ]
            }
            AppCommand::CloseSidebar => {
                if self.sidebar == SidebarVisibility::Hidden {
                    return Vec::new();
                }
                self.sidebar = SidebarVisibility::Hidden;
                vec![
                    AppEvent::SidebarChanged(self.sidebar),
                    self.set_status("menu closed"),
                ]
            }
            AppCommand::SetStatus(message) => {
                vec![self.set_status(&message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_page(&mut self, delta: isize) -> Vec<AppEvent> {
        let pages = PageKind::ALL;
        let current = pages
            .iter()
            .position(|page| *page == self.page)
            .unwrap_or(0) as isize;
        let len = pages.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.navigate(pages[next])
    }

    // Route changes also dismiss the menu overlay.
    fn navigate(&mut self, page: PageKind) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if self.sidebar == SidebarVisibility::Visible {
            self.sidebar = SidebarVisibility::Hidden;
            events.push(AppEvent::SidebarChanged(self.sidebar));
        }
        self.page = page;
        events.push(AppEvent::PageChanged(self.page));
        events
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState, SidebarVisibility};
    use crate::PageKind;

    #[test]
    fn page_rotation_wraps() {
        let mut state = AppState {
            page: PageKind::Planning,
            ..AppState::default()
        };

        let events = state.dispatch(AppCommand::NextPage);
        assert_eq!(state.page, PageKind::Dashboard);
        assert_eq!(events, vec![AppEvent::PageChanged(PageKind::Dashboard)]);

        let events = state.dispatch(AppCommand::PrevPage);
        assert_eq!(state.page, PageKind::Planning);
        assert_eq!(events, vec![AppEvent::PageChanged(PageKind::Planning)]);
    }

    #[test]
    fn toggle_sidebar_flips_exactly_once_per_dispatch() {
        let mut state = AppState::default();

        let opened = state.dispatch(AppCommand::ToggleSidebar);
        assert_eq!(state.sidebar, SidebarVisibility::Visible);
        assert_eq!(
            opened,
            vec![
                AppEvent::SidebarChanged(SidebarVisibility::Visible),
                AppEvent::StatusUpdated("menu open".to_owned()),
            ],
        );

        let closed = state.dispatch(AppCommand::ToggleSidebar);
        assert_eq!(state.sidebar, SidebarVisibility::Hidden);
        assert_eq!(
            closed,
            vec![
                AppEvent::SidebarChanged(SidebarVisibility::Hidden),
                AppEvent::StatusUpdated("menu closed".to_owned()),
            ],
        );
    }

    #[test]
    fn close_sidebar_is_idempotent() {
        let mut state = AppState::default();
        assert_eq!(state.dispatch(AppCommand::CloseSidebar), Vec::new());

        state.dispatch(AppCommand::ToggleSidebar);
        let events = state.dispatch(AppCommand::CloseSidebar);
        assert_eq!(state.sidebar, SidebarVisibility::Hidden);
        assert_eq!(
            events,
            vec![
                AppEvent::SidebarChanged(SidebarVisibility::Hidden),
                AppEvent::StatusUpdated("menu closed".to_owned()),
            ],
        );
    }

    #[test]
    fn navigation_closes_the_sidebar() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::ToggleSidebar);

        let events = state.dispatch(AppCommand::GoToPage(PageKind::Planning));
        assert_eq!(state.page, PageKind::Planning);
        assert_eq!(state.sidebar, SidebarVisibility::Hidden);
        assert_eq!(
            events,
            vec![
                AppEvent::SidebarChanged(SidebarVisibility::Hidden),
                AppEvent::PageChanged(PageKind::Planning),
            ],
        );
    }

    #[test]
    fn status_line_set_and_clear() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::SetStatus("saved".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("saved"));
        assert_eq!(events, vec![AppEvent::StatusUpdated("saved".to_owned())]);

        let events = state.dispatch(AppCommand::ClearStatus);
        assert_eq!(state.status_line, None);
        assert_eq!(events, vec![AppEvent::StatusCleared]);
    }
}
