use std::collections::HashSet;

use super::traits::BlockedServices;
use super::types::BlockChange;
use crate::utils::AghError;

/// Block the requested services on top of whatever is already blocked
///
/// Identifiers the appliance does not know are skipped and reported in
/// the result; known ones in the same request are still blocked. The
/// returned blocked set is re-fetched after the update so the caller
/// shows what the appliance actually applied.
pub async fn block(
    api: &impl BlockedServices,
    requested: &[String],
) -> Result<BlockChange, AghError> {
    let currently_blocked = api.blocked_list().await?;
    let supported: HashSet<String> = api
        .blockable_services()
        .await?
        .into_iter()
        .map(|service| service.id)
        .collect();

    let (valid, skipped): (Vec<String>, Vec<String>) = requested
        .iter()
        .cloned()
        .partition(|id| supported.contains(id));

    // The appliance may still report ids its catalog no longer carries;
    // those are dropped from the union as well
    let mut union: HashSet<String> = currently_blocked
        .into_iter()
        .filter(|id| supported.contains(id))
        .collect();
    union.extend(valid);
    let union: Vec<String> = union.into_iter().collect();

    api.set_blocked(&union).await?;

    Ok(BlockChange {
        blocked: api.blocked_list().await?,
        skipped,
    })
}

/// Unblock the requested services, leaving the rest of the blocked set alone
///
/// Identifiers that are not currently blocked are reported, not failed.
pub async fn unblock(
    api: &impl BlockedServices,
    requested: &[String],
) -> Result<BlockChange, AghError> {
    let currently_blocked = api.blocked_list().await?;
    let blocked_set: HashSet<&str> = currently_blocked.iter().map(String::as_str).collect();

    let skipped: Vec<String> = requested
        .iter()
        .filter(|id| !blocked_set.contains(id.as_str()))
        .cloned()
        .collect();

    let requested_set: HashSet<&str> = requested.iter().map(String::as_str).collect();
    let remaining: Vec<String> = currently_blocked
        .iter()
        .filter(|id| !requested_set.contains(id.as_str()))
        .cloned()
        .collect();

    api.set_blocked(&remaining).await?;

    Ok(BlockChange {
        blocked: api.blocked_list().await?,
        skipped,
    })
}

/// Block every service the appliance knows about
pub async fn block_all(api: &impl BlockedServices) -> Result<Vec<String>, AghError> {
    let all_ids: Vec<String> = api
        .blockable_services()
        .await?
        .into_iter()
        .map(|service| service.id)
        .collect();

    api.set_blocked(&all_ids).await?;
    api.blocked_list().await
}

/// Clear the blocked set entirely
pub async fn unblock_all(api: &impl BlockedServices) -> Result<(), AghError> {
    api.set_blocked(&[]).await
}

/// Currently blocked identifiers, exactly as the appliance reports them
pub async fn status(api: &impl BlockedServices) -> Result<Vec<String>, AghError> {
    api.blocked_list().await
}

/// Unique identifiers the appliance can block, first occurrence wins
pub async fn list_available(api: &impl BlockedServices) -> Result<Vec<String>, AghError> {
    let mut seen = HashSet::new();
    Ok(api
        .blockable_services()
        .await?
        .into_iter()
        .map(|service| service.id)
        .filter(|id| seen.insert(id.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::super::traits::MockBlockedServices;
    use super::super::types::ServiceDescriptor;
    use super::*;

    /// In-memory appliance: fixed catalog, mutable blocked set
    struct FakeAppliance {
        catalog: Vec<&'static str>,
        blocked: Mutex<Vec<String>>,
    }

    impl FakeAppliance {
        fn new(catalog: &[&'static str], blocked: &[&str]) -> Self {
            Self {
                catalog: catalog.to_vec(),
                blocked: Mutex::new(ids(blocked)),
            }
        }
    }

    #[async_trait]
    impl BlockedServices for FakeAppliance {
        async fn blockable_services(&self) -> Result<Vec<ServiceDescriptor>, AghError> {
            Ok(self.catalog.iter().map(|id| descriptor(id)).collect())
        }

        async fn blocked_list(&self) -> Result<Vec<String>, AghError> {
            Ok(self.blocked.lock().unwrap().clone())
        }

        async fn set_blocked(&self, ids: &[String]) -> Result<(), AghError> {
            *self.blocked.lock().unwrap() = ids.to_vec();
            Ok(())
        }
    }

    fn descriptor(id: &str) -> ServiceDescriptor {
        ServiceDescriptor {
            id: id.to_string(),
            name: id.to_string(),
            icon_svg: String::new(),
            rules: Vec::new(),
        }
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    fn sorted(mut list: Vec<String>) -> Vec<String> {
        list.sort();
        list
    }

    #[tokio::test]
    async fn block_unions_valid_ids_with_current_set() {
        let api = FakeAppliance::new(&["fb", "tw", "yt"], &["tw"]);

        let change = block(&api, &ids(&["fb", "ig"])).await.unwrap();

        assert_eq!(sorted(change.blocked), ids(&["fb", "tw"]));
        assert_eq!(change.skipped, ids(&["ig"]));
    }

    #[tokio::test]
    async fn block_never_sends_unsupported_ids() {
        let api = FakeAppliance::new(&["fb"], &[]);

        block(&api, &ids(&["fb", "ig", "snap"])).await.unwrap();

        let blocked = api.blocked_list().await.unwrap();
        assert_eq!(blocked, ids(&["fb"]));
    }

    #[tokio::test]
    async fn block_keeps_previously_blocked_services() {
        let api = FakeAppliance::new(&["fb", "tw", "yt"], &["yt"]);

        let change = block(&api, &ids(&["fb"])).await.unwrap();

        assert_eq!(sorted(change.blocked), ids(&["fb", "yt"]));
        assert!(change.skipped.is_empty());
    }

    #[tokio::test]
    async fn unblock_removes_only_requested_ids() {
        let api = FakeAppliance::new(&["fb", "tw", "yt"], &["fb", "tw"]);

        let change = unblock(&api, &ids(&["tw", "yt"])).await.unwrap();

        assert_eq!(change.blocked, ids(&["fb"]));
        assert_eq!(change.skipped, ids(&["yt"]));
    }

    #[tokio::test]
    async fn block_all_blocks_the_whole_catalog() {
        let api = FakeAppliance::new(&["fb", "tw", "yt"], &["tw"]);

        let blocked = block_all(&api).await.unwrap();

        assert_eq!(sorted(blocked), ids(&["fb", "tw", "yt"]));
    }

    #[tokio::test]
    async fn unblock_all_clears_any_prior_state() {
        let api = FakeAppliance::new(&["fb", "tw"], &["fb", "tw"]);

        unblock_all(&api).await.unwrap();

        assert!(api.blocked_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn status_reports_the_blocked_set_unmodified() {
        let api = FakeAppliance::new(&["fb", "tw"], &["tw", "fb"]);

        assert_eq!(status(&api).await.unwrap(), ids(&["tw", "fb"]));
    }

    #[tokio::test]
    async fn list_available_drops_duplicate_ids() {
        let api = FakeAppliance::new(&["fb", "tw", "fb"], &[]);

        assert_eq!(list_available(&api).await.unwrap(), ids(&["fb", "tw"]));
    }

    #[tokio::test]
    async fn remote_failure_propagates_without_an_update() {
        let mut api = MockBlockedServices::new();
        api.expect_blocked_list().returning(|| {
            Err(AghError::Remote {
                status: 403,
                text: "Forbidden".to_string(),
            })
        });
        api.expect_set_blocked().never();

        let err = block(&api, &ids(&["fb"])).await.unwrap_err();
        assert!(matches!(err, AghError::Remote { status: 403, .. }));
    }
}
