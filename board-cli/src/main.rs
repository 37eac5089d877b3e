use std::path::Path;
use std::process;

use anyhow::{Context, Result, anyhow};
use board_client::validation::{PostForm, SignupForm};
use board_client::{BoardClient, BoardClientError, DEFAULT_PAGE_SIZE, PostQuery, Session};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod print;
mod session_file;

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "board-cli", version, about = "CLI клиент для доски объявлений")]
struct Cli {
    /// Адрес прокси или бэкенда.
    #[arg(long, global = true, env = "BOARD_SERVER")]
    server: Option<String>,

    /// Подробный лог запросов в stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация пользователя.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Повтор пароля; по умолчанию совпадает с `--password`.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Вход пользователя.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Выход: удаляет сохранённую сессию.
    Logout,
    /// Кто сейчас вошёл.
    Whoami,
    /// Список постов.
    List {
        /// Номер страницы, начиная с 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
        /// Поиск по заголовку и содержимому.
        #[arg(long)]
        search: Option<String>,
    },
    /// Пост с комментариями.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Создание поста (требует вход).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Редактирование своего поста (требует вход).
    ///
    /// Не указанные поля сохраняют текущее значение.
    Edit {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Удаление поста (требует вход).
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Комментарий к посту или ответ на комментарий (требует вход).
    Comment {
        #[arg(long)]
        post_id: i64,
        #[arg(long)]
        content: String,
        /// Идентификатор комментария, на который отвечаем.
        #[arg(long)]
        reply_to: Option<i64>,
    },
    /// Удаление своего комментария (требует вход).
    Uncomment {
        #[arg(long)]
        post_id: i64,
        #[arg(long)]
        id: i64,
    },
    /// Список пользователей.
    Users,
    /// Пользователь по id.
    User {
        #[arg(long)]
        id: i64,
    },
    /// Удаление пользователя (требует вход).
    DeleteUser {
        #[arg(long)]
        id: i64,
    },
    /// Конфигурация, которую отдаёт прокси.
    Config,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("failed to init logging: {err}");
    }
}

async fn run(cli: Cli) -> Result<()> {
    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()));
    let session_path = session_file::session_path();

    let mut client = BoardClient::new(server).map_err(map_client_error)?;
    if let Some(session) = session_file::load(&session_path)
        .with_context(|| format!("не удалось прочитать {}", session_path.display()))?
    {
        client.set_session(session);
    }

    match cli.command {
        Command::Signup {
            username,
            email,
            password,
            confirm_password,
        } => {
            let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
            let form = SignupForm::new(&username, &email, &password, &confirm_password);
            form.check().map_err(map_client_error)?;

            let auth = client
                .signup(&form.username, &form.email, &form.password)
                .await
                .map_err(map_client_error)?;
            persist_session(&client, &session_path)?;
            print::print_auth("Регистрация успешна", &auth);
        }
        Command::Login { username, password } => {
            let auth = client
                .login(username.trim(), &password)
                .await
                .map_err(map_client_error)?;
            persist_session(&client, &session_path)?;
            print::print_auth("Вход выполнен", &auth);
        }
        Command::Logout => {
            client.clear_session();
            session_file::clear(&session_path).context("не удалось удалить сессию")?;
            println!("Выход выполнен");
        }
        Command::Whoami => print::print_session(client.session()),
        Command::List { page, size, search } => {
            let query = PostQuery::new(to_zero_based(page)?, size, search.as_deref());
            let posts = client.list_posts(&query).await.map_err(map_client_error)?;
            print::print_page(&posts, query.search.as_deref());
        }
        Command::Show { id } => {
            let post = client.get_post(id).await.map_err(map_client_error)?;
            print::print_post("Пост", &post);

            // Комментарии не критичны: пост показываем даже без них.
            match client.list_comments(id).await {
                Ok(comments) => print::print_comments(&comments, client.session()),
                Err(err) => {
                    tracing::warn!(post_id = id, error = %err, "failed to load comments");
                    eprintln!("Комментарии недоступны: {err}");
                }
            }
        }
        Command::Create { title, content } => {
            require_session(&client)?;
            let post = client
                .create_post(&title, &content)
                .await
                .map_err(map_client_error)?;
            print::print_post("Пост создан", &post);
        }
        Command::Edit { id, title, content } => {
            let session = require_session(&client)?;
            let current = client.get_post(id).await.map_err(map_client_error)?;
            if !session.is_author(&current.author_username) {
                return Err(anyhow!("нет прав на редактирование поста id={id}"));
            }

            let title = title.unwrap_or(current.title);
            let content = content.unwrap_or(current.content);
            PostForm::new(&title, &content)
                .check()
                .map_err(map_client_error)?;

            let post = client
                .update_post(id, &title, &content)
                .await
                .map_err(map_client_error)?;
            print::print_post("Пост обновлён", &post);
        }
        Command::Delete { id } => {
            client.delete_post(id).await.map_err(map_client_error)?;
            println!("Пост удалён: id={id}");
        }
        Command::Comment {
            post_id,
            content,
            reply_to,
        } => {
            let comment = client
                .create_comment(post_id, &content, reply_to)
                .await
                .map_err(map_client_error)?;
            match comment.parent_id {
                Some(parent_id) => println!("Ответ #{} на комментарий #{parent_id} добавлен", comment.id),
                None => println!("Комментарий #{} добавлен", comment.id),
            }
        }
        Command::Uncomment { post_id, id } => {
            client
                .delete_comment(post_id, id)
                .await
                .map_err(map_client_error)?;
            println!("Комментарий удалён: id={id}");
        }
        Command::Users => {
            let users = client.list_users().await.map_err(map_client_error)?;
            for user in &users {
                print::print_user(user);
            }
        }
        Command::User { id } => {
            let user = client.get_user(id).await.map_err(map_client_error)?;
            print::print_user(&user);
        }
        Command::DeleteUser { id } => {
            client.delete_user(id).await.map_err(map_client_error)?;
            println!("Пользователь удалён: id={id}");
        }
        Command::Config => {
            let config = client.api_config().await.map_err(map_client_error)?;
            print::print_config(config);
        }
    }

    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn to_zero_based(page: u32) -> Result<u32> {
    page.checked_sub(1)
        .ok_or_else(|| anyhow!("номер страницы начинается с 1"))
}

fn require_session(client: &BoardClient) -> Result<&Session> {
    client
        .session()
        .ok_or_else(|| map_client_error(BoardClientError::Unauthorized))
}

fn persist_session(client: &BoardClient, path: &Path) -> Result<()> {
    if let Some(session) = client.session() {
        session_file::save(path, session)
            .with_context(|| format!("не удалось сохранить сессию в {}", path.display()))?;
    }
    Ok(())
}

fn map_client_error(err: BoardClientError) -> anyhow::Error {
    let message = match err {
        BoardClientError::Unauthorized => {
            "требуется авторизация: выполните `board-cli login ...` или `board-cli signup ...`"
                .to_string()
        }
        BoardClientError::Forbidden => "недостаточно прав для этой операции".to_string(),
        BoardClientError::NotFound => "ресурс не найден".to_string(),
        BoardClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BoardClientError::Validation(message) => message,
        BoardClientError::Server { status, message } => {
            format!("ошибка сервера ({status}): {message}")
        }
        BoardClientError::Decode(message) => format!("неожиданный ответ сервера: {message}"),
        BoardClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:3000".to_string());
        assert_eq!(s, "http://127.0.0.1:3000");
    }

    #[test]
    fn pages_are_one_based_on_the_command_line() {
        assert_eq!(to_zero_based(1).expect("valid page"), 0);
        assert_eq!(to_zero_based(4).expect("valid page"), 3);
        assert!(to_zero_based(0).is_err());
    }

    #[test]
    fn unauthorized_error_suggests_login() {
        let err = map_client_error(BoardClientError::Unauthorized);
        assert!(err.to_string().contains("board-cli login"));
    }

    #[test]
    fn validation_message_is_shown_as_is() {
        let err = map_client_error(BoardClientError::Validation("Пароли не совпадают".into()));
        assert_eq!(err.to_string(), "Пароли не совпадают");
    }

    #[test]
    fn cli_parses_reply_command() {
        let cli = Cli::try_parse_from([
            "board-cli",
            "comment",
            "--post-id",
            "3",
            "--content",
            "hi",
            "--reply-to",
            "7",
        ])
        .expect("command should parse");
        match cli.command {
            Command::Comment {
                post_id, reply_to, ..
            } => {
                assert_eq!(post_id, 3);
                assert_eq!(reply_to, Some(7));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
