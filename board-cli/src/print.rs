use board_client::pagination::PageWindow;
use board_client::threads::build_threads;
use board_client::time::format_relative_now;
use board_client::{ApiConfig, AuthResponse, Comment, Page, Post, Session, User, is_author_of};

pub(crate) fn print_auth(title: &str, auth: &AuthResponse) {
    println!("{title}");
    println!("username: {}", auth.username);
    println!("email: {}", auth.email);
}

pub(crate) fn print_session(session: Option<&Session>) {
    match session {
        Some(session) => println!("{} <{}>", session.username, session.email),
        None => println!("Вход не выполнен"),
    }
}

pub(crate) fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("author: {}", post.author_username);
    println!("views: {}", post.view_count);
    println!("created: {}", format_relative_now(post.created_at));
    if let Some(updated_at) = post.updated_at {
        println!("updated: {}", format_relative_now(updated_at));
    }
    println!();
    println!("{}", post.content);
}

pub(crate) fn print_page(page: &Page<Post>, search: Option<&str>) {
    if let Some(search) = search {
        println!("Поиск: «{search}»");
    }

    if page.content.is_empty() {
        println!("Постов нет.");
        return;
    }

    for post in &page.content {
        println!(
            "- [{}] {} — {}, просмотров {}, {}",
            post.id,
            post.title,
            post.author_username,
            post.view_count,
            format_relative_now(post.created_at)
        );
        println!("    {}", preview(&post.content, 80));
    }

    let window = PageWindow::new(page.number, page.total_pages);
    if window.is_visible() {
        println!();
        println!("Страницы: {}", window.render());
    }
}

pub(crate) fn print_comments(comments: &[Comment], session: Option<&Session>) {
    println!();
    println!("Комментарии ({})", comments.len());

    for thread in build_threads(comments) {
        print_comment(&thread.comment, "", session);
        for reply in &thread.replies {
            print_comment(reply, "    ↳ ", session);
        }
    }
}

fn print_comment(comment: &Comment, indent: &str, session: Option<&Session>) {
    let mine = if is_author_of(session, &comment.author_username) {
        " (ваш)"
    } else {
        ""
    };
    println!(
        "{indent}#{} {}{mine} • {}",
        comment.id,
        comment.author_username,
        format_relative_now(comment.created_at)
    );
    println!("{indent}  {}", comment.content);
}

pub(crate) fn print_user(user: &User) {
    let role = user.role.as_deref().unwrap_or("-");
    println!("[{}] {} <{}> role={role}", user.id, user.username, user.email);
}

pub(crate) fn print_config(config: &ApiConfig) {
    println!("apiUrl: {}", config.api_url);
}

/// Первая строка текста, обрезанная до `max_chars` символов.
fn preview(content: &str, max_chars: usize) -> String {
    let line = content.lines().next().unwrap_or_default();
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let cut: String = line.chars().take(max_chars).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_first_line() {
        assert_eq!(preview("hello\nworld", 80), "hello");
    }

    #[test]
    fn preview_truncates_by_chars() {
        assert_eq!(preview("привет мир", 6), "привет…");
    }
}
