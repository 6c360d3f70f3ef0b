mod copy_button;
mod search_form;
mod search_term_link;
mod upload_button;

pub use copy_button::CopyButton;
pub use search_form::SearchForm;
pub use search_term_link::SearchTermLink;
pub use upload_button::UploadButton;
