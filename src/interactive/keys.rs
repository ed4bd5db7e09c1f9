use crossterm::event::{KeyCode, KeyEvent};

use super::app::{Popup, View};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    Select,
    Back,
    GoDashboard,
    GoUsers,
    GoCompanies,

    // Entity actions
    NewEntity,
    EditEntity,
    DeleteEntity,
    AddMember,
    RemoveMember,
    Refresh,

    // Search
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SearchSubmit,
    SearchCancel,

    // Auth
    Login,
    Logout,

    // Popups
    Confirm,
    Cancel,
    TypeChar(char),
    Backspace,
    NextField,
    PrevField,
    CycleLeft,
    CycleRight,
    PickerUp,
    PickerDown,

    // General
    Help,
    DismissNotification,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, view: View, popup: &Option<Popup>, search_active: bool) -> Action {
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    if search_active {
        return map_search_key(key);
    }
    match view {
        View::Login => map_login_key(key),
        View::Dashboard => map_dashboard_key(key),
        View::Users | View::Companies => map_list_key(key),
        View::UserDetail | View::CompanyDetail => map_detail_key(key),
    }
}

fn map_login_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => Action::Login,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_dashboard_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('1') => Action::GoDashboard,
        KeyCode::Char('2') => Action::GoUsers,
        KeyCode::Char('3') => Action::GoCompanies,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('o') => Action::Logout,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_list_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('n') => Action::NewEntity,
        KeyCode::Char('d') => Action::DeleteEntity,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('1') => Action::GoDashboard,
        KeyCode::Char('2') => Action::GoUsers,
        KeyCode::Char('3') => Action::GoCompanies,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_detail_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Back,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('e') => Action::EditEntity,
        KeyCode::Char('a') => Action::AddMember,
        KeyCode::Char('d') => Action::RemoveMember,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('1') => Action::GoDashboard,
        KeyCode::Char('2') => Action::GoUsers,
        KeyCode::Char('3') => Action::GoCompanies,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_search_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::SearchCancel,
        KeyCode::Enter => Action::SearchSubmit,
        KeyCode::Backspace => Action::SearchBackspace,
        KeyCode::Char(c) => Action::SearchInput(c),
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
        Popup::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::Form(_) => match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PrevField,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Left => Action::CycleLeft,
            KeyCode::Right => Action::CycleRight,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::TypeChar(c),
            _ => Action::None,
        },
        Popup::Picker(_) => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
            KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Esc | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}
