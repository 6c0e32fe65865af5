//! Optimistic follow/like state and small ownership checks.
//!
//! Pages patch these locally right after the request succeeds instead of
//! re-fetching. Concurrent toggles are not ordered; the last response wins.

use crate::models::{Comment, FollowUser, Like};

/// Follow button state on a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FollowState {
    pub is_following: bool,
    pub followers_count: u32,
}

impl FollowState {
    pub fn new(is_following: bool, followers_count: u32) -> Self {
        Self {
            is_following,
            followers_count,
        }
    }

    /// State after a successful follow or unfollow.
    pub fn toggled(self) -> Self {
        if self.is_following {
            Self {
                is_following: false,
                followers_count: self.followers_count.saturating_sub(1),
            }
        } else {
            Self {
                is_following: true,
                followers_count: self.followers_count + 1,
            }
        }
    }
}

/// Like button state on a note.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u32,
}

impl LikeState {
    pub fn new(liked: bool, count: u32) -> Self {
        Self { liked, count }
    }

    /// State after a successful like or unlike. The count never drops below zero.
    pub fn toggled(self) -> Self {
        if self.liked {
            Self {
                liked: false,
                count: self.count.saturating_sub(1),
            }
        } else {
            Self {
                liked: true,
                count: self.count + 1,
            }
        }
    }
}

/// The viewer's own like among a note's likes.
pub fn own_like<'a>(likes: &'a [Like], username: &str) -> Option<&'a Like> {
    likes.iter().find(|like| like.user == username)
}

/// Commenters may edit or delete their comments, and note owners may moderate
/// comments on their notes.
pub fn can_edit_comment(comment: &Comment, note_owner: &str, viewer: &str) -> bool {
    !viewer.is_empty() && (comment.commenter == viewer || note_owner == viewer)
}

/// Mark a follower as followed back after "Follow Back" succeeds.
pub fn mark_followed_back(list: &mut [FollowUser], username: &str) {
    for user in list.iter_mut().filter(|u| u.username == username) {
        user.followed_back = true;
    }
}

/// Drop a user from a following list after "Unfollow" succeeds.
pub fn remove_followee(list: &mut Vec<FollowUser>, username: &str) {
    list.retain(|u| u.username != username);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn follow_user(id: i64, username: &str) -> FollowUser {
        FollowUser {
            id,
            username: username.to_string(),
            image: None,
            followed_back: false,
        }
    }

    fn comment(commenter: &str) -> Comment {
        Comment {
            id: 1,
            note: Some(9),
            commenter: commenter.to_string(),
            content: "Nice summary".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_follow_toggle_adjusts_count() {
        let state = FollowState::new(false, 3);
        let followed = state.toggled();
        assert_eq!(followed, FollowState::new(true, 4));
        assert_eq!(followed.toggled(), state);
    }

    #[test]
    fn test_unfollow_at_zero_saturates() {
        assert_eq!(FollowState::new(true, 0).toggled(), FollowState::new(false, 0));
    }

    #[test]
    fn test_like_toggle() {
        assert_eq!(LikeState::new(false, 0).toggled(), LikeState::new(true, 1));
        assert_eq!(LikeState::new(true, 5).toggled(), LikeState::new(false, 4));
        assert_eq!(LikeState::new(true, 0).toggled(), LikeState::new(false, 0));
    }

    #[test]
    fn test_own_like() {
        let likes = vec![
            Like { id: 10, user: "leo".into(), note: Some(1), created_at: None },
            Like { id: 11, user: "amina".into(), note: Some(1), created_at: None },
        ];
        assert_eq!(own_like(&likes, "amina").map(|l| l.id), Some(11));
        assert!(own_like(&likes, "sam").is_none());
    }

    #[test]
    fn test_can_edit_comment() {
        assert!(can_edit_comment(&comment("leo"), "amina", "leo"));
        assert!(can_edit_comment(&comment("leo"), "amina", "amina"));
        assert!(!can_edit_comment(&comment("leo"), "amina", "sam"));
        assert!(!can_edit_comment(&comment(""), "", ""));
    }

    #[test]
    fn test_follow_list_patches() {
        let mut followers = vec![follow_user(1, "leo"), follow_user(2, "sam")];
        mark_followed_back(&mut followers, "sam");
        assert!(!followers[0].followed_back);
        assert!(followers[1].followed_back);

        let mut following = vec![follow_user(1, "leo"), follow_user(2, "sam")];
        remove_followee(&mut following, "leo");
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].username, "sam");
    }
}
