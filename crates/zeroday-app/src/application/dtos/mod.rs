mod contribution_dto;

pub use contribution_dto::{
    ContributionDayDto, ContributionGraphDto, ContributionWeekDto, MonthLabelDto,
};
