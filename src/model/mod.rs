pub mod vacation_request;
