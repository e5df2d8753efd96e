pub mod config;
pub mod logging;

// Engine modules
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod query;
pub mod redirect;
pub mod resolve;
pub mod uri;

pub use config::UrlkitConfig;
pub use error::{BestEffort, UrlError};
pub use fetch::{download_url, open_url};
pub use normalize::normalize_url;
pub use query::{
    add_or_replace_query_param, get_query_param, get_query_params, remove_query_param, QueryParams,
};
pub use redirect::{
    follow_redirects, get_final_url, get_final_url_with_details, RedirectHop, RedirectResult,
};
pub use resolve::resolve;
pub use uri::{
    build_url, decompose, get_base_url, get_host, get_path, get_port, get_scheme, is_valid_url,
    UrlComponents,
};
