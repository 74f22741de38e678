//! Domain value to DTO mappers

use postboard_core::value_objects::LikeToggle;

use super::responses::LikeResponse;

impl From<LikeToggle> for LikeResponse {
    fn from(toggle: LikeToggle) -> Self {
        Self {
            message: toggle.action.message().to_string(),
            likes: toggle.likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::value_objects::LikeAction;

    #[test]
    fn test_like_response_from_toggle() {
        let response = LikeResponse::from(LikeToggle::new(LikeAction::Unliked, 2));
        assert_eq!(response.message, "Post unliked");
        assert_eq!(response.likes, 2);
    }
}
