//! Клиентская библиотека доски объявлений.
//!
//! Содержит модели API бэкенда и логику, общую для всех фронтендов:
//! окно пагинации, ветки комментариев, проверку форм и форматирование
//! времени. С фичей `http` (включена по умолчанию) добавляется
//! [`BoardClient`] — обёртка над REST API поверх `reqwest`.
//!
//! Клиент хранит сессию после `signup`/`login` и прикладывает токен к каждому
//! запросу.
#![warn(missing_docs)]

#[cfg(feature = "http")]
mod client;
mod error;
#[cfg(feature = "http")]
mod http_client;
mod models;
pub mod pagination;
mod session;
pub mod threads;
pub mod time;
pub mod validation;

pub use error::{BoardClientError, BoardClientResult, error_message_from_body};
pub use models::{
    ApiConfig, AuthResponse, Comment, CommentRequest, DEFAULT_PAGE_SIZE, LoginRequest, Page,
    Post, PostQuery, PostRequest, SignupRequest, User,
};
pub use session::{Session, is_author_of};

#[cfg(feature = "http")]
pub use client::BoardClient;
