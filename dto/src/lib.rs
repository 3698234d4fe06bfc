pub mod club_event;
