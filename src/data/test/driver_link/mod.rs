use crate::{
    data::driver_link::DriverLinkRepository, error::AppError,
    model::link::CreateDriverLinkParam,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_steam_id;
mod get_all;
