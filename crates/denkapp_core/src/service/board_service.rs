//! Browsing use-cases: agenda list, task list and the tag-grouped mindmap.
//!
//! # Invariants
//! - All views are scoped to one profile.
//! - Only tasks can be toggled done.

use crate::model::item::{ItemId, ItemKind, ItemRecord};
use crate::model::profile::Profile;
use crate::repo::item_repo::{ItemListQuery, ItemRepository};
use crate::repo::topic_repo::TopicRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items sharing one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub topic: String,
    pub items: Vec<ItemRecord>,
}

/// Tag-grouped view over all items of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mindmap {
    /// Sorted case-insensitively; topics without items are kept.
    pub groups: Vec<TopicGroup>,
    pub untagged: Vec<ItemRecord>,
}

/// Read/toggle facade over item and topic repositories.
pub struct BoardService<I: ItemRepository, T: TopicRepository> {
    items: I,
    topics: T,
}

impl<I: ItemRepository, T: TopicRepository> BoardService<I, T> {
    pub fn new(items: I, topics: T) -> Self {
        Self { items, topics }
    }

    /// Agenda items in capture order.
    pub fn agenda(&self, profile: Profile) -> RepoResult<Vec<ItemRecord>> {
        self.items.list_items(
            profile,
            &ItemListQuery {
                kind: Some(ItemKind::Agenda),
                tag: None,
                include_done: true,
            },
        )
    }

    /// Tasks: open before done, then earliest due date, undated last, then
    /// capture order.
    pub fn tasks(&self, profile: Profile, include_done: bool) -> RepoResult<Vec<ItemRecord>> {
        let mut tasks = self.items.list_items(
            profile,
            &ItemListQuery {
                kind: Some(ItemKind::Task),
                tag: None,
                include_done,
            },
        )?;
        tasks.sort_by_key(|task| (task.done.unwrap_or(false), task.due_at.is_none(), task.due_at));
        Ok(tasks)
    }

    /// All items carrying `tag`, matched case-insensitively.
    pub fn items_for_tag(&self, profile: Profile, tag: &str) -> RepoResult<Vec<ItemRecord>> {
        self.items.list_items(
            profile,
            &ItemListQuery {
                kind: None,
                tag: Some(tag.to_string()),
                include_done: true,
            },
        )
    }

    /// Groups every item under each of its tags.
    ///
    /// Topic nodes supply group titles; item tags without a node still get a
    /// group under their own spelling.
    pub fn mindmap(&self, profile: Profile) -> RepoResult<Mindmap> {
        let mut groups: BTreeMap<String, TopicGroup> = BTreeMap::new();
        for topic in self.topics.list_topics(profile)? {
            groups.insert(
                topic.title.to_lowercase(),
                TopicGroup {
                    topic: topic.title,
                    items: Vec::new(),
                },
            );
        }

        let mut untagged = Vec::new();
        let all = self.items.list_items(
            profile,
            &ItemListQuery {
                kind: None,
                tag: None,
                include_done: true,
            },
        )?;
        for item in all {
            if item.tags.is_empty() {
                untagged.push(item);
                continue;
            }
            for tag in &item.tags {
                groups
                    .entry(tag.to_lowercase())
                    .or_insert_with(|| TopicGroup {
                        topic: tag.clone(),
                        items: Vec::new(),
                    })
                    .items
                    .push(item.clone());
            }
        }

        Ok(Mindmap {
            groups: groups.into_values().collect(),
            untagged,
        })
    }

    /// Marks a task done or open and returns the updated record.
    pub fn set_task_done(&self, profile: Profile, id: ItemId, done: bool) -> RepoResult<ItemRecord> {
        self.items.set_task_done(profile, id, done)?;
        info!("event=task_toggle module=service status=ok profile={profile} item_id={id} done={done}");
        self.items
            .get_item(profile, id)?
            .ok_or(RepoError::NotFound(id))
    }
}
