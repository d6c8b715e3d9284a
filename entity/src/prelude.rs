pub use super::alarm::Entity as Alarm;
pub use super::bookmark::Entity as Bookmark;
pub use super::budget::Entity as Budget;
pub use super::chat_message::Entity as ChatMessage;
pub use super::chat_room::Entity as ChatRoom;
pub use super::chat_room_user::Entity as ChatRoomUser;
pub use super::comment::Entity as Comment;
pub use super::like::Entity as Like;
pub use super::location::Entity as Location;
pub use super::plan::Entity as Plan;
pub use super::plan_user::Entity as PlanUser;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
