//! URL map: the two login portals, the password-reset flow of each role and
//! one dashboard tree per role. Every dashboard route sits behind
//! `RequireRole`.

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::{path, MatchNestedRoutes};

use crate::dashboards::{DashboardHome, ReportsPage};
use crate::domain::a001_pwd_record::ui::details::PwdRecordDetails;
use crate::domain::a001_pwd_record::ui::form::{EditPwdRecordPage, RegisterPwdPage};
use crate::domain::a001_pwd_record::ui::list::PwdRecordList;
use crate::domain::a002_assistance_request::ui::details::AssistanceDetails;
use crate::domain::a002_assistance_request::ui::edit::EditAssistanceRequest;
use crate::domain::a002_assistance_request::ui::list::AssistanceList;
use crate::domain::a002_assistance_request::ui::log_form::LogAssistancePage;
use crate::layout::DashboardShell;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::otp::OtpPage;
use crate::system::pages::reset_password::ResetPasswordPage;
use crate::system::settings::SettingsPage;
use crate::system::users::ui::list::UsersList;
use crate::system::users::ui::profile::ProfilePage;

fn shell(role: Role) -> impl IntoView {
    view! {
        <RequireRole role=role>
            <DashboardShell role=role />
        </RequireRole>
    }
}

#[component(transparent)]
fn AdminRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <ParentRoute path=path!("/admin-dashboard") view=|| shell(Role::Admin)>
            <Route path=path!("") view=DashboardHome />
            <Route path=path!("register-pwd") view=RegisterPwdPage />
            <Route path=path!("pwd-records") view=PwdRecordList />
            <Route path=path!("pwd-records/:id") view=PwdRecordDetails />
            <Route path=path!("pwd-records/:id/edit") view=EditPwdRecordPage />
            <Route path=path!("assistance") view=AssistanceList />
            <Route path=path!("assistance/:id") view=AssistanceDetails />
            <Route path=path!("assistance/:id/edit") view=EditAssistanceRequest />
            <Route path=path!("log-assistance") view=LogAssistancePage />
            <Route path=path!("reports") view=ReportsPage />
            <Route path=path!("users") view=UsersList />
            <Route path=path!("settings") view=SettingsPage />
            <Route path=path!("profile") view=ProfilePage />
        </ParentRoute>
    }
    .into_inner()
}

#[component(transparent)]
fn OfficerRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <ParentRoute path=path!("/officer-dashboard") view=|| shell(Role::Officer)>
            <Route path=path!("") view=DashboardHome />
            <Route path=path!("register-pwd") view=RegisterPwdPage />
            <Route path=path!("pwd-records") view=PwdRecordList />
            <Route path=path!("pwd-records/:id") view=PwdRecordDetails />
            <Route path=path!("pwd-records/:id/edit") view=EditPwdRecordPage />
            <Route path=path!("assistance") view=AssistanceList />
            <Route path=path!("assistance/:id") view=AssistanceDetails />
            <Route path=path!("assistance/:id/edit") view=EditAssistanceRequest />
            <Route path=path!("log-assistance") view=LogAssistancePage />
            <Route path=path!("profile") view=ProfilePage />
        </ParentRoute>
    }
    .into_inner()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <LoginPage role=Role::Officer /> } />
                <Route path=path!("/admin") view=|| view! { <LoginPage role=Role::Admin /> } />

                <Route path=path!("/officer-forgot-password") view=|| view! { <ForgotPasswordPage role=Role::Officer /> } />
                <Route path=path!("/officer-otp") view=|| view! { <OtpPage role=Role::Officer /> } />
                <Route path=path!("/officer-reset-password") view=|| view! { <ResetPasswordPage role=Role::Officer /> } />
                <Route path=path!("/admin-forgot-password") view=|| view! { <ForgotPasswordPage role=Role::Admin /> } />
                <Route path=path!("/admin-otp") view=|| view! { <OtpPage role=Role::Admin /> } />
                <Route path=path!("/admin-reset-password") view=|| view! { <ResetPasswordPage role=Role::Admin /> } />

                <AdminRoutes />
                <OfficerRoutes />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use contracts::system::auth::Role;

    // The literal paths above must agree with the role's path helpers.
    #[test]
    fn test_route_paths_match_roles() {
        assert_eq!(Role::Officer.login_path(), "/");
        assert_eq!(Role::Admin.login_path(), "/admin");
        assert_eq!(Role::Admin.home_path(), "/admin-dashboard");
        assert_eq!(Role::Officer.home_path(), "/officer-dashboard");
        assert_eq!(Role::Admin.otp_path(), "/admin-otp");
        assert_eq!(Role::Officer.reset_password_path(), "/officer-reset-password");
        assert_eq!(Role::Officer.forgot_password_path(), "/officer-forgot-password");
    }
}
