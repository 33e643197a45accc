pub mod dto;
pub mod handler;
pub mod helpers;
pub mod service;

pub use dto::{
    ListMenteesQuery, MenteeFilter, MenteeRecord, MenteeSummaryDto, ResponseDetailDto,
    ResponseRecord,
};
pub use handler::{handle_list_houses, handle_list_mentees, handle_mentee_responses};
pub use helpers::{MenteeListOptions, SortKey, SortOrder};
pub use service::{MenteeDataSource, MenteeService};
