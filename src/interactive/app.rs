use std::time::Instant;

use crate::auth::Session;
use crate::client::ApiClient;
use crate::error::AdminError;
use crate::logging::{log_debug, log_info};
use crate::models::{Company, CompanyPayload, User, UserPayload, COMPANY_SIZES};
use crate::search::{filter_collection, partition_companies, partition_users};
use crate::stats::DashboardStats;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Login,
    Dashboard,
    Users,
    Companies,
    UserDetail,
    CompanyDetail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Loading,
    Info,
}

pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

/// Actions that require an explicit yes before a request is issued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmAction {
    DeleteUser(u64),
    DeleteCompany(u64),
    RemoveCompanyFromUser { user_id: u64, company_id: u64 },
    RemoveUserFromCompany { company_id: u64, user_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerKind {
    AddCompanyToUser(u64),
    AddUserToCompany(u64),
}

pub struct PickerState {
    pub kind: PickerKind,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormKind {
    CreateUser,
    EditUser(u64),
    CreateCompany,
    EditCompany(u64),
}

pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    /// Size bucket fields cycle through fixed options instead of free text.
    pub size_select: bool,
}

impl FormField {
    fn text(label: &'static str, value: String, required: bool) -> Self {
        Self {
            label,
            value,
            required,
            size_select: false,
        }
    }

    fn size(value: String) -> Self {
        Self {
            label: "Size",
            value,
            required: false,
            size_select: true,
        }
    }
}

/// A controlled create/edit form. Values live here until submit; a failed
/// submit keeps them for correction.
pub struct EntityForm {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub active_field: usize,
    pub submitting: bool,
}

impl EntityForm {
    pub fn create_user() -> Self {
        Self {
            kind: FormKind::CreateUser,
            fields: vec![
                FormField::text("Username", String::new(), true),
                FormField::text("Email", String::new(), true),
                FormField::text("First name", String::new(), false),
                FormField::text("Last name", String::new(), false),
            ],
            active_field: 0,
            submitting: false,
        }
    }

    pub fn edit_user(user: &User) -> Self {
        Self {
            kind: FormKind::EditUser(user.id),
            fields: vec![
                FormField::text("Username", user.username.clone(), true),
                FormField::text("Email", user.email.clone(), true),
                FormField::text("First name", user.first_name.clone().unwrap_or_default(), false),
                FormField::text("Last name", user.last_name.clone().unwrap_or_default(), false),
            ],
            active_field: 0,
            submitting: false,
        }
    }

    pub fn create_company() -> Self {
        Self {
            kind: FormKind::CreateCompany,
            fields: vec![
                FormField::text("Name", String::new(), true),
                FormField::text("Address", String::new(), false),
                FormField::text("Industry", String::new(), false),
                FormField::size(String::new()),
            ],
            active_field: 0,
            submitting: false,
        }
    }

    pub fn edit_company(company: &Company) -> Self {
        Self {
            kind: FormKind::EditCompany(company.id),
            fields: vec![
                FormField::text("Name", company.name.clone(), true),
                FormField::text("Address", company.address.clone().unwrap_or_default(), false),
                FormField::text("Industry", company.industry.clone().unwrap_or_default(), false),
                FormField::size(company.company_size.clone().unwrap_or_default()),
            ],
            active_field: 0,
            submitting: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            FormKind::CreateUser => " New User ",
            FormKind::EditUser(_) => " Edit User ",
            FormKind::CreateCompany => " New Company ",
            FormKind::EditCompany(_) => " Edit Company ",
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = self.fields.len() - 1;
        } else {
            self.active_field -= 1;
        }
    }

    pub fn type_char(&mut self, c: char) {
        let field = &mut self.fields[self.active_field];
        if !field.size_select {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = &mut self.fields[self.active_field];
        if !field.size_select {
            field.value.pop();
        }
    }

    /// Cycle the size bucket: empty -> first -> ... -> last -> empty.
    pub fn cycle_size(&mut self, forward: bool) {
        let field = &mut self.fields[self.active_field];
        if !field.size_select {
            return;
        }
        let position = COMPANY_SIZES.iter().position(|s| *s == field.value);
        field.value = match (position, forward) {
            (None, true) => COMPANY_SIZES[0].to_string(),
            (None, false) => COMPANY_SIZES[COMPANY_SIZES.len() - 1].to_string(),
            (Some(i), true) if i + 1 < COMPANY_SIZES.len() => COMPANY_SIZES[i + 1].to_string(),
            (Some(_), true) => String::new(),
            (Some(0), false) => String::new(),
            (Some(i), false) => COMPANY_SIZES[i - 1].to_string(),
        };
    }

    /// Local required-field check; a failing form never reaches the network.
    pub fn validate(&self) -> Result<(), String> {
        for field in &self.fields {
            if field.required && field.value.trim().is_empty() {
                return Err(format!("{} is required", field.label));
            }
        }
        Ok(())
    }

    fn field_value(&self, label: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default()
    }

    fn optional_field(&self, label: &str) -> Option<String> {
        let value = self.field_value(label);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    pub fn to_user_payload(&self) -> Result<UserPayload, String> {
        self.validate()?;
        Ok(UserPayload {
            username: self.field_value("Username"),
            email: self.field_value("Email"),
            first_name: self.optional_field("First name"),
            last_name: self.optional_field("Last name"),
        })
    }

    pub fn to_company_payload(&self) -> Result<CompanyPayload, String> {
        self.validate()?;
        Ok(CompanyPayload {
            name: self.field_value("Name"),
            address: self.optional_field("Address"),
            industry: self.optional_field("Industry"),
            company_size: self.optional_field("Size"),
        })
    }
}

pub enum Popup {
    Help,
    Confirm(ConfirmAction),
    Form(EntityForm),
    Picker(PickerState),
}

pub struct App {
    pub session: Session,
    pub client: ApiClient,
    pub view: View,
    pub should_quit: bool,
    pub loading: bool,
    pub error_message: Option<String>,

    // List-view snapshots. Each view owns its fetch; nothing is shared or
    // cached across views.
    pub users: Vec<User>,
    pub companies: Vec<Company>,
    pub filtered_users: Vec<User>,
    pub filtered_companies: Vec<Company>,
    pub selected_index: usize,
    pub search_active: bool,
    pub search_query: String,

    // Dashboard
    pub stats: DashboardStats,
    pub operator: Option<User>,

    // Detail views
    pub detail_user: Option<User>,
    pub related_companies: Vec<Company>,
    pub available_companies: Vec<Company>,
    pub detail_company: Option<Company>,
    pub member_users: Vec<User>,
    pub available_users: Vec<User>,
    pub member_index: usize,

    pub popup: Option<Popup>,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(session: Session, client: ApiClient) -> Self {
        let view = if session.is_authenticated() {
            View::Dashboard
        } else {
            View::Login
        };

        Self {
            session,
            client,
            view,
            should_quit: false,
            loading: false,
            error_message: None,
            users: Vec::new(),
            companies: Vec::new(),
            filtered_users: Vec::new(),
            filtered_companies: Vec::new(),
            selected_index: 0,
            search_active: false,
            search_query: String::new(),
            stats: DashboardStats::default(),
            operator: None,
            detail_user: None,
            related_companies: Vec::new(),
            available_companies: Vec::new(),
            detail_company: None,
            member_users: Vec::new(),
            available_users: Vec::new(),
            member_index: 0,
            popup: None,
            notifications: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    pub fn prune_notifications(&mut self) {
        self.notifications.retain(|n| {
            !n.dismissed
                && match n.kind {
                    NotificationKind::Success | NotificationKind::Info => {
                        n.created_at.elapsed().as_secs() < 5
                    }
                    // Errors stay until dismissed.
                    NotificationKind::Error | NotificationKind::Loading => true,
                }
        });
    }

    pub fn dismiss_notifications(&mut self) {
        for n in &mut self.notifications {
            n.dismissed = true;
        }
    }

    /// Central failure sink. A 401 tears down the session and routes to the
    /// login view; everything else becomes an error notification.
    pub fn fail(&mut self, err: AdminError) {
        match err {
            AdminError::Unauthorized => {
                log_info("401 from resource server; clearing session");
                self.session.clear();
                self.view = View::Login;
                self.popup = None;
                self.notify(
                    NotificationKind::Error,
                    "Session expired. Log in again to continue.",
                );
            }
            other => {
                self.notify(NotificationKind::Error, other.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    pub async fn refresh_dashboard(&mut self) {
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        self.loading = true;
        self.error_message = None;

        let joined = tokio::try_join!(
            self.client.list_users(&token),
            self.client.list_companies(&token)
        );
        match joined {
            Ok((users, companies)) => {
                self.stats = DashboardStats::compute(&users, &companies);
                self.operator = self
                    .client
                    .current_user(&token)
                    .await
                    .ok()
                    .and_then(|me| me.user);
            }
            Err(e) => self.fail(e),
        }
        self.loading = false;
    }

    pub async fn open_users(&mut self) {
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        self.view = View::Users;
        self.selected_index = 0;
        self.search_active = false;
        self.search_query.clear();
        self.loading = true;
        self.error_message = None;

        match self.client.list_users(&token).await {
            Ok(users) => {
                self.users = users;
                self.apply_filter();
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load users: {}", e));
                self.fail(e);
            }
        }
        self.loading = false;
    }

    pub async fn open_companies(&mut self) {
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        self.view = View::Companies;
        self.selected_index = 0;
        self.search_active = false;
        self.search_query.clear();
        self.loading = true;
        self.error_message = None;

        match self.client.list_companies(&token).await {
            Ok(companies) => {
                self.companies = companies;
                self.apply_filter();
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load companies: {}", e));
                self.fail(e);
            }
        }
        self.loading = false;
    }

    /// Fetch one user and the full company collection together; either
    /// failure aborts populating the view.
    pub async fn open_user_detail(&mut self, user_id: u64) {
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        self.loading = true;
        let joined = tokio::try_join!(
            self.client.get_user(&token, user_id),
            self.client.list_companies(&token)
        );
        match joined {
            Ok((user, companies)) => {
                let (related, available) = partition_companies(&user, &companies);
                self.detail_user = Some(user);
                self.related_companies = related;
                self.available_companies = available;
                self.member_index = 0;
                self.view = View::UserDetail;
            }
            Err(e) => self.fail(e),
        }
        self.loading = false;
    }

    pub async fn open_company_detail(&mut self, company_id: u64) {
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        self.loading = true;
        let joined = tokio::try_join!(
            self.client.get_company(&token, company_id),
            self.client.list_users(&token)
        );
        match joined {
            Ok((company, users)) => {
                let (members, available) = partition_users(&company, &users);
                self.detail_company = Some(company);
                self.member_users = members;
                self.available_users = available;
                self.member_index = 0;
                self.view = View::CompanyDetail;
            }
            Err(e) => self.fail(e),
        }
        self.loading = false;
    }

    pub async fn refresh_current(&mut self) {
        match self.view {
            View::Dashboard => self.refresh_dashboard().await,
            View::Users => self.open_users().await,
            View::Companies => self.open_companies().await,
            View::UserDetail => {
                if let Some(id) = self.detail_user.as_ref().map(|u| u.id) {
                    self.open_user_detail(id).await;
                }
            }
            View::CompanyDetail => {
                if let Some(id) = self.detail_company.as_ref().map(|c| c.id) {
                    self.open_company_detail(id).await;
                }
            }
            View::Login => {}
        }
    }

    // ------------------------------------------------------------------
    // Search / selection
    // ------------------------------------------------------------------

    pub fn apply_filter(&mut self) {
        self.filtered_users = filter_collection(&self.users, &self.search_query);
        self.filtered_companies = filter_collection(&self.companies, &self.search_query);

        let len = match self.view {
            View::Users => self.filtered_users.len(),
            View::Companies => self.filtered_companies.len(),
            _ => return,
        };
        if self.selected_index >= len && len > 0 {
            self.selected_index = len - 1;
        }
    }

    fn current_list_len(&self) -> usize {
        match self.view {
            View::Users => self.filtered_users.len(),
            View::Companies => self.filtered_companies.len(),
            View::UserDetail => self.related_companies.len(),
            View::CompanyDetail => self.member_users.len(),
            _ => 0,
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        match self.view {
            View::UserDetail | View::CompanyDetail => {
                self.member_index = (self.member_index + 1) % len;
            }
            _ => {
                self.selected_index = (self.selected_index + 1) % len;
            }
        }
    }

    pub fn move_selection_up(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let index = match self.view {
            View::UserDetail | View::CompanyDetail => &mut self.member_index,
            _ => &mut self.selected_index,
        };
        *index = if *index == 0 { len - 1 } else { *index - 1 };
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.filtered_users.get(self.selected_index)
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.filtered_companies.get(self.selected_index)
    }

    // ------------------------------------------------------------------
    // Popups: confirm / picker / forms
    // ------------------------------------------------------------------

    pub fn open_delete_confirm(&mut self) {
        let action = match self.view {
            View::Users => self.selected_user().map(|u| ConfirmAction::DeleteUser(u.id)),
            View::Companies => self
                .selected_company()
                .map(|c| ConfirmAction::DeleteCompany(c.id)),
            _ => None,
        };
        if let Some(action) = action {
            self.popup = Some(Popup::Confirm(action));
        }
    }

    pub fn open_remove_member_confirm(&mut self) {
        let action = match self.view {
            View::UserDetail => match (&self.detail_user, self.related_companies.get(self.member_index)) {
                (Some(user), Some(company)) => Some(ConfirmAction::RemoveCompanyFromUser {
                    user_id: user.id,
                    company_id: company.id,
                }),
                _ => None,
            },
            View::CompanyDetail => match (&self.detail_company, self.member_users.get(self.member_index)) {
                (Some(company), Some(user)) => Some(ConfirmAction::RemoveUserFromCompany {
                    company_id: company.id,
                    user_id: user.id,
                }),
                _ => None,
            },
            _ => None,
        };
        if let Some(action) = action {
            self.popup = Some(Popup::Confirm(action));
        }
    }

    pub fn open_add_member_picker(&mut self) {
        let kind = match self.view {
            View::UserDetail => {
                if self.available_companies.is_empty() {
                    self.notify(NotificationKind::Info, "No available companies to add");
                    return;
                }
                self.detail_user.as_ref().map(|u| PickerKind::AddCompanyToUser(u.id))
            }
            View::CompanyDetail => {
                if self.available_users.is_empty() {
                    self.notify(NotificationKind::Info, "No available users to add");
                    return;
                }
                self.detail_company
                    .as_ref()
                    .map(|c| PickerKind::AddUserToCompany(c.id))
            }
            _ => None,
        };
        if let Some(kind) = kind {
            self.popup = Some(Popup::Picker(PickerState { kind, index: 0 }));
        }
    }

    pub fn open_create_form(&mut self) {
        let form = match self.view {
            View::Users => Some(EntityForm::create_user()),
            View::Companies => Some(EntityForm::create_company()),
            _ => None,
        };
        if let Some(form) = form {
            self.popup = Some(Popup::Form(form));
        }
    }

    pub fn open_edit_form(&mut self) {
        let form = match self.view {
            View::UserDetail => self.detail_user.as_ref().map(EntityForm::edit_user),
            View::CompanyDetail => self.detail_company.as_ref().map(EntityForm::edit_company),
            _ => None,
        };
        if let Some(form) = form {
            self.popup = Some(Popup::Form(form));
        }
    }

    pub fn picker_move(&mut self, down: bool) {
        let len = match &self.popup {
            Some(Popup::Picker(picker)) => match picker.kind {
                PickerKind::AddCompanyToUser(_) => self.available_companies.len(),
                PickerKind::AddUserToCompany(_) => self.available_users.len(),
            },
            _ => return,
        };
        if len == 0 {
            return;
        }
        if let Some(Popup::Picker(picker)) = &mut self.popup {
            picker.index = if down {
                (picker.index + 1) % len
            } else if picker.index == 0 {
                len - 1
            } else {
                picker.index - 1
            };
        }
    }

    /// Run the confirmed destructive action. Deletes remove the entity from
    /// local list state only after the server acknowledges; membership
    /// removals trigger a full detail refetch.
    pub async fn run_confirm_action(&mut self, action: ConfirmAction) {
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        match action {
            ConfirmAction::DeleteUser(id) => {
                match self.client.delete_user(&token, id).await {
                    Ok(()) => {
                        self.users.retain(|u| u.id != id);
                        self.apply_filter();
                        self.notify(NotificationKind::Success, format!("User {} deleted", id));
                    }
                    Err(e) => self.fail(e),
                }
            }
            ConfirmAction::DeleteCompany(id) => {
                match self.client.delete_company(&token, id).await {
                    Ok(()) => {
                        self.companies.retain(|c| c.id != id);
                        self.apply_filter();
                        self.notify(NotificationKind::Success, format!("Company {} deleted", id));
                    }
                    Err(e) => self.fail(e),
                }
            }
            ConfirmAction::RemoveCompanyFromUser { user_id, company_id } => {
                match self
                    .client
                    .remove_user_from_company(&token, user_id, company_id)
                    .await
                {
                    Ok(_) => {
                        self.notify(NotificationKind::Success, "Membership removed");
                        self.open_user_detail(user_id).await;
                    }
                    Err(e) => self.fail(e),
                }
            }
            ConfirmAction::RemoveUserFromCompany { company_id, user_id } => {
                match self
                    .client
                    .remove_company_member(&token, company_id, user_id)
                    .await
                {
                    Ok(_) => {
                        self.notify(NotificationKind::Success, "Member removed");
                        self.open_company_detail(company_id).await;
                    }
                    Err(e) => self.fail(e),
                }
            }
        }
    }

    pub async fn run_picker_selection(&mut self) {
        let Some(Popup::Picker(picker)) = self.popup.take() else {
            return;
        };
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        match picker.kind {
            PickerKind::AddCompanyToUser(user_id) => {
                let Some(company) = self.available_companies.get(picker.index) else {
                    return;
                };
                let company_id = company.id;
                match self
                    .client
                    .add_user_to_company(&token, user_id, company_id)
                    .await
                {
                    Ok(_) => {
                        self.notify(NotificationKind::Success, "Company added");
                        self.open_user_detail(user_id).await;
                    }
                    Err(e) => self.fail(e),
                }
            }
            PickerKind::AddUserToCompany(company_id) => {
                let Some(user) = self.available_users.get(picker.index) else {
                    return;
                };
                let user_id = user.id;
                match self
                    .client
                    .add_company_member(&token, company_id, user_id)
                    .await
                {
                    Ok(_) => {
                        self.notify(NotificationKind::Success, "Member added");
                        self.open_company_detail(company_id).await;
                    }
                    Err(e) => self.fail(e),
                }
            }
        }
    }

    /// Submit the open form. Validation failures never issue a request and
    /// keep the form open with its values; server failures do the same.
    pub async fn submit_form(&mut self) {
        let Some(Popup::Form(mut form)) = self.popup.take() else {
            return;
        };
        if form.submitting {
            self.popup = Some(Popup::Form(form));
            return;
        }
        let Ok(token) = self.session.access_token() else {
            self.view = View::Login;
            return;
        };

        match form.kind.clone() {
            FormKind::CreateUser => match form.to_user_payload() {
                Ok(payload) => {
                    form.submitting = true;
                    match self.client.create_user(&token, &payload).await {
                        Ok(user) => {
                            self.notify(
                                NotificationKind::Success,
                                format!("User {} created", user.username),
                            );
                            self.open_users().await;
                        }
                        Err(e) => {
                            form.submitting = false;
                            self.popup = Some(Popup::Form(form));
                            self.fail(e);
                        }
                    }
                }
                Err(msg) => {
                    self.popup = Some(Popup::Form(form));
                    self.notify(NotificationKind::Error, msg);
                }
            },
            FormKind::EditUser(id) => match form.to_user_payload() {
                Ok(payload) => {
                    form.submitting = true;
                    match self.client.update_user(&token, id, &payload).await {
                        Ok(user) => {
                            // Replace local entity state with the server's
                            // response and leave edit mode.
                            let (related, available) =
                                partition_companies(&user, &all_companies(&self.related_companies, &self.available_companies));
                            self.related_companies = related;
                            self.available_companies = available;
                            self.detail_user = Some(user);
                            self.notify(NotificationKind::Success, "User updated");
                        }
                        Err(e) => {
                            form.submitting = false;
                            self.popup = Some(Popup::Form(form));
                            self.fail(e);
                        }
                    }
                }
                Err(msg) => {
                    self.popup = Some(Popup::Form(form));
                    self.notify(NotificationKind::Error, msg);
                }
            },
            FormKind::CreateCompany => match form.to_company_payload() {
                Ok(payload) => {
                    form.submitting = true;
                    match self.client.create_company(&token, &payload).await {
                        Ok(company) => {
                            self.notify(
                                NotificationKind::Success,
                                format!("Company {} created", company.name),
                            );
                            self.open_companies().await;
                        }
                        Err(e) => {
                            form.submitting = false;
                            self.popup = Some(Popup::Form(form));
                            self.fail(e);
                        }
                    }
                }
                Err(msg) => {
                    self.popup = Some(Popup::Form(form));
                    self.notify(NotificationKind::Error, msg);
                }
            },
            FormKind::EditCompany(id) => match form.to_company_payload() {
                Ok(payload) => {
                    form.submitting = true;
                    match self.client.update_company(&token, id, &payload).await {
                        Ok(company) => {
                            let (members, available) =
                                partition_users(&company, &all_users(&self.member_users, &self.available_users));
                            self.member_users = members;
                            self.available_users = available;
                            self.detail_company = Some(company);
                            self.notify(NotificationKind::Success, "Company updated");
                        }
                        Err(e) => {
                            form.submitting = false;
                            self.popup = Some(Popup::Form(form));
                            self.fail(e);
                        }
                    }
                }
                Err(msg) => {
                    self.popup = Some(Popup::Form(form));
                    self.notify(NotificationKind::Error, msg);
                }
            },
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn do_login(&mut self) {
        let result = self
            .session
            .login(|url| log_debug(&format!("Authorize URL: {}", url)))
            .await;

        match result {
            Ok(profile) => {
                self.notify(
                    NotificationKind::Success,
                    format!("Logged in as {}", profile.label()),
                );
                // Best-effort sync so the operator shows up on the dashboard.
                if let Ok(token) = self.session.access_token() {
                    let _ = self.client.sync_current_user(&token).await;
                }
                self.view = View::Dashboard;
                self.refresh_dashboard().await;
            }
            Err(e) => {
                self.notify(NotificationKind::Error, format!("Login failed: {}", e));
                self.view = View::Login;
            }
        }
    }

    pub async fn do_logout(&mut self) {
        self.session.logout().await;
        self.view = View::Login;
        self.notify(NotificationKind::Info, "Logged out");
    }

    // ------------------------------------------------------------------
    // Action dispatch
    // ------------------------------------------------------------------

    pub async fn dispatch(&mut self, action: crate::interactive::keys::Action) {
        use crate::interactive::keys::Action;

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.popup = Some(Popup::Help),
            Action::DismissNotification => self.dismiss_notifications(),

            Action::MoveDown => self.move_selection_down(),
            Action::MoveUp => self.move_selection_up(),

            Action::GoDashboard => {
                self.view = View::Dashboard;
                self.refresh_dashboard().await;
            }
            Action::GoUsers => self.open_users().await,
            Action::GoCompanies => self.open_companies().await,
            Action::Refresh => self.refresh_current().await,

            Action::Select => match self.view {
                View::Users => {
                    if let Some(id) = self.selected_user().map(|u| u.id) {
                        self.open_user_detail(id).await;
                    }
                }
                View::Companies => {
                    if let Some(id) = self.selected_company().map(|c| c.id) {
                        self.open_company_detail(id).await;
                    }
                }
                _ => {}
            },

            Action::Back => match self.view {
                View::UserDetail => self.open_users().await,
                View::CompanyDetail => self.open_companies().await,
                View::Users | View::Companies => {
                    self.view = View::Dashboard;
                    self.refresh_dashboard().await;
                }
                _ => {}
            },

            Action::NewEntity => self.open_create_form(),
            Action::EditEntity => self.open_edit_form(),
            Action::DeleteEntity => self.open_delete_confirm(),
            Action::AddMember => self.open_add_member_picker(),
            Action::RemoveMember => self.open_remove_member_confirm(),

            Action::StartSearch => {
                self.search_active = true;
            }
            Action::SearchInput(c) => {
                self.search_query.push(c);
                self.apply_filter();
            }
            Action::SearchBackspace => {
                self.search_query.pop();
                self.apply_filter();
            }
            Action::SearchSubmit => {
                self.search_active = false;
            }
            Action::SearchCancel => {
                self.search_active = false;
                self.search_query.clear();
                self.apply_filter();
            }

            Action::Login => self.do_login().await,
            Action::Logout => self.do_logout().await,

            // Popup plumbing
            Action::Cancel => {
                self.popup = None;
            }
            Action::Confirm => match self.popup.take() {
                Some(Popup::Confirm(action)) => self.run_confirm_action(action).await,
                Some(Popup::Picker(picker)) => {
                    self.popup = Some(Popup::Picker(picker));
                    self.run_picker_selection().await;
                }
                Some(Popup::Form(form)) => {
                    self.popup = Some(Popup::Form(form));
                    self.submit_form().await;
                }
                Some(Popup::Help) | None => {}
            },
            Action::TypeChar(c) => {
                if let Some(Popup::Form(form)) = &mut self.popup {
                    form.type_char(c);
                }
            }
            Action::Backspace => {
                if let Some(Popup::Form(form)) = &mut self.popup {
                    form.backspace();
                }
            }
            Action::NextField => {
                if let Some(Popup::Form(form)) = &mut self.popup {
                    form.next_field();
                }
            }
            Action::PrevField => {
                if let Some(Popup::Form(form)) = &mut self.popup {
                    form.prev_field();
                }
            }
            Action::CycleLeft => {
                if let Some(Popup::Form(form)) = &mut self.popup {
                    form.cycle_size(false);
                }
            }
            Action::CycleRight => {
                if let Some(Popup::Form(form)) = &mut self.popup {
                    form.cycle_size(true);
                }
            }
            Action::PickerDown => self.picker_move(true),
            Action::PickerUp => self.picker_move(false),

            Action::None => {}
        }
    }
}

fn all_companies(related: &[Company], available: &[Company]) -> Vec<Company> {
    related.iter().chain(available.iter()).cloned().collect()
}

fn all_users(members: &[User], available: &[User]) -> Vec<User> {
    members.iter().chain(available.iter()).cloned().collect()
}
