//! Capabilities shared by the records the client manages
//!
//! Every backend record has an id and a kind name ([`Record`]); travel and
//! visa requests additionally move through the approval lifecycle
//! ([`WorkflowEntity`]).

use travelgate_domain::constants::messages;
use travelgate_domain::{
    Mission, Passport, Project, RequestId, RequestStatus, TravelRequest, VisaRequest,
};

/// User-facing texts posted by a catalog for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

impl CatalogMessages {
    pub const REQUEST: Self = Self {
        created: messages::CREATED,
        updated: messages::UPDATED,
        deleted: messages::DELETED,
        load_failed: messages::LOAD_FAILED,
        create_failed: messages::CREATE_FAILED,
        update_failed: messages::UPDATE_FAILED,
        delete_failed: messages::DELETE_FAILED,
    };

    pub const PROJECT: Self = Self {
        created: messages::PROJECT_CREATED,
        updated: messages::PROJECT_UPDATED,
        deleted: messages::PROJECT_DELETED,
        load_failed: messages::PROJECT_LOAD_FAILED,
        create_failed: messages::PROJECT_CREATE_FAILED,
        update_failed: messages::PROJECT_UPDATE_FAILED,
        delete_failed: messages::PROJECT_DELETE_FAILED,
    };

    pub const MISSION: Self = Self {
        created: messages::MISSION_CREATED,
        updated: messages::MISSION_UPDATED,
        deleted: messages::MISSION_DELETED,
        load_failed: messages::MISSION_LOAD_FAILED,
        create_failed: messages::MISSION_CREATE_FAILED,
        update_failed: messages::MISSION_UPDATE_FAILED,
        delete_failed: messages::MISSION_DELETE_FAILED,
    };

    pub const PASSPORT: Self = Self {
        created: messages::PASSPORT_CREATED,
        updated: messages::PASSPORT_UPDATED,
        deleted: messages::PASSPORT_DELETED,
        load_failed: messages::PASSPORT_LOAD_FAILED,
        create_failed: messages::PASSPORT_CREATE_FAILED,
        update_failed: messages::PASSPORT_UPDATE_FAILED,
        delete_failed: messages::PASSPORT_DELETE_FAILED,
    };
}

/// A record stored by the backend.
pub trait Record: Clone + Send + Sync + 'static {
    /// Short kind name used in log fields (`"travel"`, `"mission"`).
    const KIND: &'static str;

    /// Messages a catalog of this kind posts.
    const MESSAGES: CatalogMessages;

    /// Backend identifier, absent before creation.
    fn id(&self) -> Option<RequestId>;

    /// Normalize an edited record before it is sent.
    fn for_update(self) -> Self {
        self
    }
}

/// A request that moves through the two-step approval lifecycle.
pub trait WorkflowEntity: Record {
    /// Current lifecycle status.
    fn status(&self) -> &RequestStatus;

    /// Reset the request for submission (status back to `PENDING`).
    fn into_submission(self) -> Self;
}

impl Record for TravelRequest {
    const KIND: &'static str = "travel";
    const MESSAGES: CatalogMessages = CatalogMessages::REQUEST;

    fn id(&self) -> Option<RequestId> {
        self.id
    }

    fn for_update(self) -> Self {
        self.into_submission()
    }
}

impl WorkflowEntity for TravelRequest {
    fn status(&self) -> &RequestStatus {
        &self.status
    }

    fn into_submission(self) -> Self {
        TravelRequest::into_submission(self)
    }
}

impl Record for VisaRequest {
    const KIND: &'static str = "visa";
    const MESSAGES: CatalogMessages = CatalogMessages::REQUEST;

    fn id(&self) -> Option<RequestId> {
        self.id
    }

    fn for_update(self) -> Self {
        self.into_submission()
    }
}

impl WorkflowEntity for VisaRequest {
    fn status(&self) -> &RequestStatus {
        &self.status
    }

    fn into_submission(self) -> Self {
        VisaRequest::into_submission(self)
    }
}

impl Record for Project {
    const KIND: &'static str = "project";
    const MESSAGES: CatalogMessages = CatalogMessages::PROJECT;

    fn id(&self) -> Option<RequestId> {
        self.id
    }
}

impl Record for Mission {
    const KIND: &'static str = "mission";
    const MESSAGES: CatalogMessages = CatalogMessages::MISSION;

    fn id(&self) -> Option<RequestId> {
        self.id
    }
}

impl Record for Passport {
    const KIND: &'static str = "passport";
    const MESSAGES: CatalogMessages = CatalogMessages::PASSPORT;

    fn id(&self) -> Option<RequestId> {
        self.id
    }

    fn for_update(self) -> Self {
        self.trimmed()
    }
}

/// Find a record by id in a snapshot.
pub fn find_by_id<E: Record>(collection: &[E], id: RequestId) -> Option<&E> {
    collection.iter().find(|entity| entity.id() == Some(id))
}
