use crate::db::Db;
use crate::models::Platform;
use crate::schema;
use aidex_dto as dto;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rocket_db_pools::diesel::RunQueryDsl;
use std::collections::BTreeSet;

/// One row of the controlled tag vocabulary offered on the submission
/// form. Custom tags on platforms never get a row here.
#[derive(Clone, Debug, Queryable, Identifiable, Selectable)]
#[diesel(table_name = schema::predefined_tags)]
pub struct PredefinedTag {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PredefinedTag> for dto::tags::Tag {
    fn from(value: PredefinedTag) -> Self {
        dto::tags::Tag {
            id: value.id,
            name: value.name,
        }
    }
}

impl PredefinedTag {
    pub async fn list(db: &mut Db) -> Result<Vec<Self>, diesel::result::Error> {
        schema::predefined_tags::table
            .order_by(schema::predefined_tags::name.asc())
            .load::<Self>(db)
            .await
    }
}

/// The vocabulary merged with every tag in use on a platform row,
/// deduplicated and sorted.
pub async fn tag_universe(db: &mut Db) -> Result<Vec<String>, diesel::result::Error> {
    let mut tags = PredefinedTag::list(db)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect::<BTreeSet<_>>();

    for platform_tags in Platform::tags_in_use(db).await? {
        tags.extend(platform_tags);
    }

    Ok(tags.into_iter().collect())
}
