use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Pallet {
    id: u32,
    label: String,
    boxes: i32,
}

#[derive(Debug)]
struct PalletCreate {
    label: String,
    boxes: i32,
}

#[derive(Debug)]
struct PalletUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum PalletAction {
    Load(i32),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum PalletError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("pallet would hold {0} boxes")]
    Overdrawn(i32),
}

/// Minimum box count enforced by `Load`.
struct Floor(i32);

#[async_trait]
impl ActorEntity for Pallet {
    type Id = u32;
    type Create = PalletCreate;
    type Update = PalletUpdate;
    type Action = PalletAction;
    type ActionResult = i32;
    type Context = Floor;
    type Error = PalletError;

    fn from_create_params(id: u32, params: PalletCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            boxes: params.boxes,
        })
    }

    async fn on_create(&mut self, _ctx: &Floor) -> Result<(), Self::Error> {
        if self.label.is_empty() {
            return Err(PalletError::EmptyLabel);
        }
        Ok(())
    }

    async fn on_update(&mut self, update: PalletUpdate, _ctx: &Floor) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            if label.is_empty() {
                return Err(PalletError::EmptyLabel);
            }
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: PalletAction, ctx: &Floor) -> Result<i32, Self::Error> {
        match action {
            PalletAction::Load(delta) => {
                // mutate first so a rejected action proves the store keeps the old copy
                self.boxes += delta;
                if self.boxes < ctx.0 {
                    return Err(PalletError::Overdrawn(self.boxes));
                }
                Ok(self.boxes)
            }
        }
    }
}

fn pallet(label: &str, boxes: i32) -> PalletCreate {
    PalletCreate {
        label: label.to_string(),
        boxes,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::<Pallet>::new(10);
    let handle = tokio::spawn(actor.run(Floor(0)));

    // Create returns the stored record with its assigned id
    let created = client.create(pallet("north", 10)).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.label, "north");

    // Update returns the post-update record
    let updated = client
        .update(
            created.id,
            PalletUpdate {
                label: Some("south".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "south");
    assert_eq!(updated.boxes, 10);

    // Action mutates atomically inside the actor
    let boxes = client
        .perform_action(created.id, PalletAction::Load(3))
        .await
        .unwrap();
    assert_eq!(boxes, 13);
    assert_eq!(client.get(created.id).await.unwrap().unwrap().boxes, 13);

    // Delete hands back the removed record
    let removed = client.delete(created.id).await.unwrap();
    assert_eq!(removed.label, "south");
    assert!(client.get(created.id).await.unwrap().is_none());
    assert!(client.list().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_is_ordered_and_ids_are_not_reused() {
    let (actor, client) = ResourceActor::<Pallet>::new(10);
    tokio::spawn(actor.run(Floor(0)));

    assert!(client.list().await.unwrap().is_empty());

    for label in ["a", "b", "c"] {
        client.create(pallet(label, 1)).await.unwrap();
    }
    client.delete(2).await.unwrap();
    let next = client.create(pallet("d", 1)).await.unwrap();
    assert_eq!(next.id, 4);

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Pallet>::new(10);
    tokio::spawn(actor.run(Floor(0)));

    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(
        client.update(42, PalletUpdate { label: None }).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));
    assert!(matches!(
        client.delete(42).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.perform_action(42, PalletAction::Load(1)).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_failed_hooks_leave_store_untouched() {
    let (actor, client) = ResourceActor::<Pallet>::new(10);
    tokio::spawn(actor.run(Floor(0)));

    let err = client.create(pallet("", 1)).await.unwrap_err();
    assert_eq!(err.into_entity_error::<PalletError>().unwrap(), PalletError::EmptyLabel);
    assert!(client.list().await.unwrap().is_empty());

    let created = client.create(pallet("east", 2)).await.unwrap();

    let err = client
        .update(created.id, PalletUpdate { label: Some(String::new()) })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    let err = client
        .perform_action(created.id, PalletAction::Load(-5))
        .await
        .unwrap_err();
    assert_eq!(err.into_entity_error::<PalletError>().unwrap(), PalletError::Overdrawn(-3));

    let stored = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, Pallet { id: created.id, label: "east".into(), boxes: 2 });
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Pallet>::new(10);
    drop(actor);

    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
