pub mod verify_proposal;
