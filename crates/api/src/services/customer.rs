//! Customer service.
//!
//! Owns contacts and their addresses. Registration binds the new contact to
//! the session; guest flows keep created checkout addresses reachable through
//! session-stored ids.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use sugarcane_core::{AddressId, AddressType, ContactId};

use super::ServiceError;
use crate::models::{Address, AddressFields, Contact, ContactFields, SessionContext};

/// Capability interface for customer and address ownership.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// The contact bound to the session, if any.
    async fn contact(&self, session: &SessionContext) -> Result<Option<Contact>, ServiceError>;

    /// Addresses visible to the session, optionally filtered by type.
    ///
    /// For a logged-in contact these are the contact's addresses; for a guest
    /// they are the checkout addresses created earlier in the session.
    async fn addresses(
        &self,
        session: &SessionContext,
        kind: Option<AddressType>,
    ) -> Result<Vec<Address>, ServiceError>;

    /// Create a contact with optional checkout addresses and bind it to the
    /// session.
    ///
    /// A billing address given without a delivery address is recorded as both.
    async fn register_customer(
        &self,
        session: &SessionContext,
        contact: ContactFields,
        billing: Option<AddressFields>,
        delivery: Option<AddressFields>,
    ) -> Result<Contact, ServiceError>;

    /// Merge fields into the logged-in contact. Returns `None` for guests.
    async fn update_contact(
        &self,
        session: &SessionContext,
        fields: ContactFields,
    ) -> Result<Option<Contact>, ServiceError>;

    /// Create an address of the given type for the session.
    async fn create_address(
        &self,
        session: &SessionContext,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError>;

    /// Replace the fields of an existing address.
    async fn update_address(
        &self,
        session: &SessionContext,
        id: AddressId,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError>;

    /// Delete an address.
    async fn delete_address(
        &self,
        session: &SessionContext,
        id: AddressId,
        kind: AddressType,
    ) -> Result<(), ServiceError>;
}

/// In-memory reference implementation.
#[derive(Debug, Default)]
pub struct InMemoryCustomerService {
    store: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    contacts: HashMap<ContactId, Contact>,
    addresses: HashMap<AddressId, OwnedAddress>,
    next_contact_id: i32,
    next_address_id: i32,
}

#[derive(Debug, Clone)]
struct OwnedAddress {
    address: Address,
    owner: Option<ContactId>,
}

impl Store {
    fn create_contact(&mut self, fields: ContactFields) -> Contact {
        self.next_contact_id += 1;
        let contact = Contact {
            id: ContactId::new(self.next_contact_id),
            created_at: Utc::now(),
            fields,
        };
        self.contacts.insert(contact.id, contact.clone());
        contact
    }

    fn create_address(
        &mut self,
        fields: AddressFields,
        kind: AddressType,
        owner: Option<ContactId>,
    ) -> Address {
        self.next_address_id += 1;
        let address = Address {
            id: AddressId::new(self.next_address_id),
            type_id: kind,
            fields,
        };
        self.addresses
            .insert(address.id, OwnedAddress { address: address.clone(), owner });
        address
    }

    fn addresses_of(&self, owner: ContactId, kind: Option<AddressType>) -> Vec<Address> {
        let mut list: Vec<Address> = self
            .addresses
            .values()
            .filter(|entry| entry.owner == Some(owner))
            .filter(|entry| kind.is_none_or(|k| entry.address.type_id == k))
            .map(|entry| entry.address.clone())
            .collect();
        list.sort_by_key(|address| address.id);
        list
    }
}

impl InMemoryCustomerService {
    /// Create an address and, for guests, remember it in the session.
    async fn create_for_session(
        &self,
        session: &SessionContext,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError> {
        let owner = session.contact_id().await?;
        let address = self
            .store
            .write()
            .await
            .create_address(fields, kind, owner);

        if owner.is_none() {
            session.set_guest_address_id(kind, address.id).await?;
        }
        Ok(address)
    }
}

#[async_trait]
impl CustomerService for InMemoryCustomerService {
    async fn contact(&self, session: &SessionContext) -> Result<Option<Contact>, ServiceError> {
        let Some(id) = session.contact_id().await? else {
            return Ok(None);
        };
        Ok(self.store.read().await.contacts.get(&id).cloned())
    }

    async fn addresses(
        &self,
        session: &SessionContext,
        kind: Option<AddressType>,
    ) -> Result<Vec<Address>, ServiceError> {
        if let Some(owner) = session.contact_id().await? {
            return Ok(self.store.read().await.addresses_of(owner, kind));
        }

        // Guests: resolve the session-stored checkout address ids. Dangling
        // ids (deleted addresses) resolve to nothing.
        let kinds = match kind {
            Some(k) => vec![k],
            None => vec![AddressType::Billing, AddressType::Delivery],
        };
        let mut list = Vec::new();
        for k in kinds {
            if let Some(id) = session.guest_address_id(k).await? {
                let store = self.store.read().await;
                if let Some(entry) = store.addresses.get(&id) {
                    list.push(entry.address.clone());
                }
            }
        }
        Ok(list)
    }

    async fn register_customer(
        &self,
        session: &SessionContext,
        contact: ContactFields,
        billing: Option<AddressFields>,
        delivery: Option<AddressFields>,
    ) -> Result<Contact, ServiceError> {
        let contact = self.store.write().await.create_contact(contact);

        // The platform logs a freshly registered contact in; binding the id
        // to the session is the equivalent here.
        session.set_contact_id(contact.id).await?;

        if let Some(billing) = billing {
            self.create_for_session(session, billing.clone(), AddressType::Billing)
                .await?;
            if delivery.is_none() {
                // A single submitted address serves as both.
                self.create_for_session(session, billing, AddressType::Delivery)
                    .await?;
            }
        }
        if let Some(delivery) = delivery {
            self.create_for_session(session, delivery, AddressType::Delivery)
                .await?;
        }

        Ok(contact)
    }

    async fn update_contact(
        &self,
        session: &SessionContext,
        fields: ContactFields,
    ) -> Result<Option<Contact>, ServiceError> {
        let Some(id) = session.contact_id().await? else {
            return Ok(None);
        };

        let mut store = self.store.write().await;
        let Some(contact) = store.contacts.get_mut(&id) else {
            return Ok(None);
        };
        for (key, value) in fields {
            contact.fields.insert(key, value);
        }
        Ok(Some(contact.clone()))
    }

    async fn create_address(
        &self,
        session: &SessionContext,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError> {
        self.create_for_session(session, fields, kind).await
    }

    async fn update_address(
        &self,
        session: &SessionContext,
        id: AddressId,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError> {
        let owner = session.contact_id().await?;
        let mut store = self.store.write().await;
        let entry = store
            .addresses
            .get_mut(&id)
            .filter(|entry| entry.address.type_id == kind && entry.owner == owner)
            .ok_or(ServiceError::NotFound("address"))?;

        entry.address.fields = fields;
        Ok(entry.address.clone())
    }

    async fn delete_address(
        &self,
        session: &SessionContext,
        id: AddressId,
        kind: AddressType,
    ) -> Result<(), ServiceError> {
        let owner = session.contact_id().await?;
        let mut store = self.store.write().await;
        let matches = store
            .addresses
            .get(&id)
            .is_some_and(|entry| entry.address.type_id == kind && entry.owner == owner);
        if !matches {
            return Err(ServiceError::NotFound("address"));
        }
        store.addresses.remove(&id);
        Ok(())
    }
}
