use diesel::prelude::*;

use crate::{
    models::contact_models::{Contact, NewContact},
    schema::contacts,
    DbPool,
};

pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Insert one submission
    pub fn insert(&self, entry: NewContact) -> anyhow::Result<()> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(contacts::table)
            .values(&entry)
            .execute(&mut conn)?;
        Ok(())
    }

    // Latest submissions, newest first
    pub fn latest(&self, limit: i64) -> anyhow::Result<Vec<Contact>> {
        let mut conn = self.pool.get()?;
        let entries = contacts::table
            .order((contacts::created_at.desc(), contacts::id.desc()))
            .limit(limit)
            .load::<Contact>(&mut conn)?;
        Ok(entries)
    }
}
