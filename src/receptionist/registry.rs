//! The process-local service-discovery registry: a typed-key map from name
//! to an ordered list of actor refs, with type-conflict detection over
//! erased storage.

// Layer 1: Standard library imports
use std::any::TypeId;
use std::collections::HashMap;

// Layer 2: Third-party crate imports
use tokio::sync::RwLock;

// Layer 3: Internal module imports
use crate::actor::{ActorRef, BaseActorRef};
use crate::error::RuntimeError;
use crate::message::Message;

use super::service_key::ServiceKey;

struct Signature {
    msg: TypeId,
    resp: TypeId,
    description: String,
}

#[derive(Default)]
struct Inner {
    registrations: HashMap<String, Vec<std::sync::Arc<dyn BaseActorRef>>>,
    signatures: HashMap<String, Signature>,
}

/// Typed service discovery: actors register under a name, routers and
/// callers look them up by the same name. One registry per `ActorSystem`.
#[derive(Default)]
pub struct Receptionist {
    inner: RwLock<Inner>,
}

fn describe<M: Message, R: 'static>() -> String {
    format!("{}->{}", M::MESSAGE_TYPE, std::any::type_name::<R>())
}

impl Receptionist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `actor_ref` under `key`. The first registration for a name
    /// fixes its message/response signature; later registrations with a
    /// different signature are rejected.
    pub async fn register<M, R>(&self, key: &ServiceKey<M, R>, actor_ref: ActorRef<M, R>) -> Result<(), RuntimeError>
    where
        M: Message,
        R: Send + Sync + 'static,
    {
        let mut inner = self.inner.write().await;
        let requested = Signature {
            msg: TypeId::of::<M>(),
            resp: TypeId::of::<R>(),
            description: describe::<M, R>(),
        };

        match inner.signatures.get(key.name()) {
            Some(existing) if existing.msg != requested.msg || existing.resp != requested.resp => {
                return Err(RuntimeError::ServiceKeyTypeMismatch {
                    name: key.name().to_string(),
                    existing: existing.description.clone(),
                    requested: requested.description,
                });
            }
            _ => {}
        }

        inner.signatures.entry(key.name().to_string()).or_insert(requested);
        inner
            .registrations
            .entry(key.name().to_string())
            .or_default()
            .push(std::sync::Arc::new(actor_ref));
        Ok(())
    }

    /// All currently-registered refs under `key`, in registration order.
    /// Entries whose erased type does not match are silently skipped — the
    /// signature check in `register` already guarantees this never happens
    /// in practice.
    pub async fn find<M, R>(&self, key: &ServiceKey<M, R>) -> Vec<ActorRef<M, R>>
    where
        M: Message,
        R: Send + Sync + 'static,
    {
        let inner = self.inner.read().await;
        let Some(refs) = inner.registrations.get(key.name()) else {
            return Vec::new();
        };
        refs.iter()
            .filter_map(|base| base.as_any().downcast_ref::<ActorRef<M, R>>().cloned())
            .collect()
    }

    /// Removes one matching ref (by id) from `key`'s list. Returns `true` if
    /// a ref was removed. Deletes both registry entries once the list under
    /// `name` becomes empty, so the name can be reused with a new signature.
    pub async fn unregister<M, R>(&self, key: &ServiceKey<M, R>, actor_ref: &ActorRef<M, R>) -> bool
    where
        M: Message,
        R: Send + Sync + 'static,
    {
        let mut inner = self.inner.write().await;
        let Some(refs) = inner.registrations.get_mut(key.name()) else {
            return false;
        };
        let before = refs.len();
        refs.retain(|existing| existing.id() != actor_ref.id());
        let removed = refs.len() < before;
        if refs.is_empty() {
            inner.registrations.remove(key.name());
            inner.signatures.remove(key.name());
        }
        removed
    }

    /// Removes every ref under `key`, returning the count removed.
    pub async fn unregister_all<M, R>(&self, key: &ServiceKey<M, R>) -> usize
    where
        M: Message,
        R: Send + Sync + 'static,
    {
        let mut inner = self.inner.write().await;
        inner.signatures.remove(key.name());
        inner.registrations.remove(key.name()).map_or(0, |refs| refs.len())
    }
}
