use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::errors::DemoError;
use super::resource::ResourceKind;

/// Wire form of every demo record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoRecord {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Partial record from a create or update body; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl DemoPatch {
    pub fn title(t: &str) -> Self { Self { title: Some(t.to_string()), ..Default::default() } }
    pub fn name(n: &str) -> Self { Self { name: Some(n.to_string()), ..Default::default() } }

    /// Every collection carries the full record; present fields overwrite.
    fn apply(self, rec: &mut DemoRecord) {
        if let Some(t) = self.title { rec.title = Some(t); }
        if let Some(s) = self.slug { rec.slug = Some(s); }
        if let Some(n) = self.name { rec.name = Some(n); }
    }
}

#[derive(Debug)]
struct Collection {
    next_id: u64,
    items: Vec<DemoRecord>,
}

impl Collection {
    fn new() -> Self { Self { next_id: 1, items: Vec::new() } }

    fn insert(&mut self, patch: DemoPatch) -> DemoRecord {
        let mut rec = DemoRecord { id: self.next_id, title: None, name: None, slug: None };
        self.next_id += 1;
        patch.apply(&mut rec);
        self.items.push(rec.clone());
        rec
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|r| r.id == id)
    }
}

/// Volatile record store, one mutex per collection.
///
/// Ids come from a per-collection counter and are never reused after deletion.
///
/// ```
/// use service::demo::{DemoPatch, DemoStore};
/// let store = DemoStore::new();
/// let a = tokio_test::block_on(store.create("articles", DemoPatch::title("A"))).unwrap();
/// assert_eq!(a.id, 1);
/// assert_eq!(a.name, None);
/// ```
#[derive(Debug)]
pub struct DemoStore {
    collections: HashMap<ResourceKind, Mutex<Collection>>,
}

impl Default for DemoStore {
    fn default() -> Self { Self::new() }
}

impl DemoStore {
    /// Every known collection, all empty.
    pub fn new() -> Self {
        let collections = ResourceKind::ALL
            .into_iter()
            .map(|k| (k, Mutex::new(Collection::new())))
            .collect();
        Self { collections }
    }

    /// A store with a couple of starter records per collection.
    pub fn seeded() -> Self {
        let titled = |t: &str, slug: Option<&str>| DemoPatch { title: Some(t.to_string()), slug: slug.map(str::to_string), name: None };
        let seed: [(ResourceKind, Vec<DemoPatch>); 8] = [
            (ResourceKind::Pages, vec![titled("Home", Some("home")), titled("About", Some("about"))]),
            (ResourceKind::Articles, vec![titled("Welcome to the new site", Some("welcome"))]),
            (ResourceKind::Media, vec![DemoPatch::title("Community service photos")]),
            (ResourceKind::Documents, vec![titled("New member guide", Some("new-member-guide"))]),
            (ResourceKind::Events, vec![titled("Leadership seminar", Some("leadership-seminar"))]),
            (ResourceKind::Members, vec![DemoPatch::name("Ahmad Rizki"), DemoPatch::name("Siti Nurhaliza")]),
            (ResourceKind::Tasks, vec![DemoPatch::title("Prepare seminar banner")]),
            (ResourceKind::Registrations, vec![DemoPatch::name("Ana Putri")]),
        ];
        let mut collections = HashMap::new();
        for (kind, rows) in seed {
            let mut c = Collection::new();
            for patch in rows {
                c.insert(patch);
            }
            collections.insert(kind, Mutex::new(c));
        }
        Self { collections }
    }

    fn collection(&self, resource: &str) -> Result<(ResourceKind, &Mutex<Collection>), DemoError> {
        let kind: ResourceKind = resource.parse()?;
        let c = self.collections.get(&kind).ok_or_else(|| DemoError::UnknownResource(resource.to_string()))?;
        Ok((kind, c))
    }

    pub async fn list(&self, resource: &str) -> Result<Vec<DemoRecord>, DemoError> {
        let (_, c) = self.collection(resource)?;
        Ok(c.lock().await.items.clone())
    }

    pub async fn create(&self, resource: &str, patch: DemoPatch) -> Result<DemoRecord, DemoError> {
        let (_, c) = self.collection(resource)?;
        Ok(c.lock().await.insert(patch))
    }

    pub async fn update(&self, resource: &str, id: u64, patch: DemoPatch) -> Result<DemoRecord, DemoError> {
        let (kind, c) = self.collection(resource)?;
        let mut c = c.lock().await;
        let idx = c.position(id).ok_or_else(|| not_found(kind, id))?;
        let rec = &mut c.items[idx];
        patch.apply(rec);
        Ok(rec.clone())
    }

    /// Remove record `id`; the remaining records keep their order.
    pub async fn delete(&self, resource: &str, id: u64) -> Result<(), DemoError> {
        let (kind, c) = self.collection(resource)?;
        let mut c = c.lock().await;
        let idx = c.position(id).ok_or_else(|| not_found(kind, id))?;
        c.items.remove(idx);
        Ok(())
    }
}

fn not_found(kind: ResourceKind, id: u64) -> DemoError {
    DemoError::NotFound { resource: kind.as_str(), id: id.to_string() }
}
