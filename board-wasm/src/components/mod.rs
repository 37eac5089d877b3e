pub(crate) mod auth_forms;
pub(crate) mod comment_section;
pub(crate) mod navbar;
pub(crate) mod pagination;
pub(crate) mod post_detail;
pub(crate) mod post_form;
pub(crate) mod post_list;
