//! `SeaORM` entities for the member/team schema.

pub mod member;
pub mod team;
