pub mod friend_list_response;
pub mod friends;
