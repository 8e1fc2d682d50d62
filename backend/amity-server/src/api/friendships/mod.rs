pub mod create_friendship_request;
pub mod friendship_dto;
pub mod friendship_list_response;
pub mod friendship_response;
pub mod friendships;
pub mod respond_friendship_request;
