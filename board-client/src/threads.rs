use crate::models::Comment;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Корневой комментарий вместе с ответами на него.
pub struct CommentThread {
    /// Корневой комментарий.
    pub comment: Comment,
    /// Ответы в порядке, в котором их вернул бэкенд.
    pub replies: Vec<Comment>,
}

impl CommentThread {
    /// Ключ для перерисовки: меняется при любом изменении состава ответов.
    pub fn render_key(&self) -> (i64, Vec<i64>) {
        (
            self.comment.id,
            self.replies.iter().map(|reply| reply.id).collect(),
        )
    }
}

/// Группирует плоский список комментариев в ветки одного уровня.
///
/// Порядок корней и ответов сохраняется. Ответы на ответы и ответы с
/// несуществующим родителем не отображаются.
pub fn build_threads(comments: &[Comment]) -> Vec<CommentThread> {
    comments
        .iter()
        .filter(|comment| comment.parent_id.is_none())
        .map(|root| CommentThread {
            comment: root.clone(),
            replies: comments
                .iter()
                .filter(|reply| reply.parent_id == Some(root.id))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn comment(id: i64, parent_id: Option<i64>, author: &str) -> Comment {
        Comment {
            id,
            content: format!("comment {id}"),
            author_username: author.to_string(),
            post_id: 1,
            parent_id,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|date| date.and_hms_opt(12, 0, id as u32))
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn replies_are_attached_to_their_root() {
        let comments = vec![
            comment(1, None, "alice"),
            comment(2, None, "bob"),
            comment(3, Some(1), "bob"),
            comment(4, Some(1), "carol"),
            comment(5, Some(2), "alice"),
        ];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].comment.id, 1);
        let first_replies: Vec<i64> = threads[0].replies.iter().map(|c| c.id).collect();
        assert_eq!(first_replies, vec![3, 4]);
        assert_eq!(threads[1].replies.len(), 1);
        assert_eq!(threads[1].replies[0].id, 5);
    }

    #[test]
    fn nested_and_orphan_replies_are_hidden() {
        let comments = vec![
            comment(1, None, "alice"),
            comment(2, Some(1), "bob"),
            comment(3, Some(2), "carol"),
            comment(4, Some(99), "dave"),
        ];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].replies.len(), 1);
        assert_eq!(threads[0].replies[0].id, 2);
    }

    #[test]
    fn empty_input_gives_no_threads() {
        assert!(build_threads(&[]).is_empty());
    }

    #[test]
    fn render_key_follows_reply_ids_not_count() {
        let before = build_threads(&[
            comment(1, None, "alice"),
            comment(2, Some(1), "bob"),
        ]);
        let after = build_threads(&[
            comment(1, None, "alice"),
            comment(3, Some(1), "carol"),
        ]);

        assert_eq!(before[0].replies.len(), after[0].replies.len());
        assert_ne!(before[0].render_key(), after[0].render_key());
        assert_eq!(after[0].render_key(), (1, vec![3]));
    }
}
