use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

/// Append-only in-memory table with a database-like id sequence.
///
/// Ids handed out by [`MemoryTable::next_id`] are never reused, even when the
/// row they were reserved for is never pushed (a rolled-back write).
pub struct MemoryTable<T> {
    rows: RwLock<Vec<T>>,
    seq: AtomicI64,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self { rows: RwLock::new(Vec::new()), seq: AtomicI64::new(0) }
    }
}

impl<T: Clone> MemoryTable<T> {
    pub fn next_id(&self) -> i64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn push(&self, row: T) {
        self.rows.write().await.push(row);
    }

    pub async fn extend<I: IntoIterator<Item = T>>(&self, rows: I) {
        self.rows.write().await.extend(rows);
    }

    /// Snapshot in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn find<F: Fn(&T) -> bool>(&self, pred: F) -> Option<T> {
        self.rows.read().await.iter().find(|r| pred(r)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_monotonic_and_not_reused() {
        let t: MemoryTable<i64> = MemoryTable::default();
        let a = t.next_id();
        let _skipped = t.next_id();
        let c = t.next_id();
        assert_eq!(a, 1);
        assert_eq!(c, 3);
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let t: MemoryTable<&'static str> = MemoryTable::default();
        assert!(t.all().await.is_empty());
        t.push("b").await;
        t.extend(["a", "c"]).await;
        assert_eq!(t.all().await, vec!["b", "a", "c"]);
        assert_eq!(t.find(|r| *r == "a").await, Some("a"));
    }
}
