mod friends;
mod friendship;
mod friendship_decision;
mod friendship_status;
mod new_friendship;
