//! Application constants
//!
//! Centralized location for domain-level constants: user-facing messages and
//! default timings.

/// Delay before an ephemeral success/error message is cleared.
pub const DEFAULT_MESSAGE_CLEAR_MS: u64 = 4000;

/// Default per-request HTTP timeout.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Days before the mission date below which a visa is flagged urgent.
pub const VISA_URGENT_DAYS: i64 = 7;

/// Days before the mission date below which a visa is flagged high priority.
pub const VISA_HIGH_PRIORITY_DAYS: i64 = 30;

/// User-facing messages (French, as displayed by the back office).
pub mod messages {
    pub const FORBIDDEN_STEP1: &str =
        "Action interdite : seul un OFFICER peut valider/rejeter un voyage";
    pub const FORBIDDEN_STEP2: &str = "Action interdite : seul un HEAD_MARKET peut valider étape 2";
    pub const STEP1_OUT_OF_ORDER: &str =
        "Action interdite : cette demande n'est plus en attente de l'étape 1";
    pub const STEP2_OUT_OF_ORDER: &str =
        "Action interdite : l'étape 1 doit être approuvée avant l'étape 2";

    pub const HTTP_400: &str = "Requête invalide. Vérifiez les données envoyées.";
    pub const HTTP_401: &str = "Non authentifié. Veuillez vous reconnecter.";
    pub const HTTP_403: &str = "Accès refusé. Vous n'avez pas les permissions nécessaires.";
    pub const HTTP_404: &str = "Ressource non trouvée.";
    pub const HTTP_500: &str = "Erreur serveur interne. Veuillez réessayer plus tard.";

    pub const VALIDATION_FAILED: &str = "Erreur lors de la validation";
    pub const LOAD_FAILED: &str = "Erreur lors du chargement des demandes";
    pub const CREATE_FAILED: &str = "Erreur lors de la création.";
    pub const UPDATE_FAILED: &str = "Erreur lors de la mise à jour.";
    pub const DELETE_FAILED: &str = "Erreur lors de la suppression.";
    pub const PASSPORT_REQUIRED: &str = "Veuillez sélectionner un passeport";

    pub const CREATED: &str = "Demande créée avec succès";
    pub const UPDATED: &str = "Demande mise à jour.";
    pub const DELETED: &str = "Demande supprimée.";
    pub const VALIDATED: &str = "Décision enregistrée.";

    pub const PROJECT_CREATED: &str = "Projet créé avec succès";
    pub const PROJECT_UPDATED: &str = "Projet mis à jour avec succès";
    pub const PROJECT_DELETED: &str = "Projet supprimé avec succès";
    pub const PROJECT_LOAD_FAILED: &str = "Erreur lors du chargement des projets";
    pub const PROJECT_CREATE_FAILED: &str = "Erreur lors de la création du projet";
    pub const PROJECT_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du projet";
    pub const PROJECT_DELETE_FAILED: &str = "Erreur lors de la suppression du projet";

    pub const MISSION_CREATED: &str = "Mission créée avec succès";
    pub const MISSION_UPDATED: &str = "Mission mise à jour avec succès";
    pub const MISSION_DELETED: &str = "Mission supprimée avec succès";
    pub const MISSION_LOAD_FAILED: &str = "Erreur lors du chargement des missions";
    pub const MISSION_CREATE_FAILED: &str = "Erreur lors de la création de la mission";
    pub const MISSION_UPDATE_FAILED: &str = "Erreur lors de la mise à jour de la mission";
    pub const MISSION_DELETE_FAILED: &str = "Erreur lors de la suppression de la mission";
    pub const FORBIDDEN_MISSION_SAVE: &str =
        "Action interdite : seul un OFFICER peut créer ou modifier une mission";
    pub const FORBIDDEN_MISSION_EDIT: &str =
        "Action interdite : seul un OFFICER peut modifier une mission";
    pub const FORBIDDEN_MISSION_DELETE: &str =
        "Action interdite : seul un OFFICER peut supprimer une mission";

    pub const PASSPORT_CREATED: &str = "Passeport créé avec succès !";
    pub const PASSPORT_UPDATED: &str = "Passeport mis à jour.";
    pub const PASSPORT_DELETED: &str = "Passeport supprimé.";
    pub const PASSPORT_LOAD_FAILED: &str = "Erreur lors du chargement des passeports";
    pub const PASSPORT_CREATE_FAILED: &str = "Erreur lors de la création du passeport";
    pub const PASSPORT_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du passeport";
    pub const PASSPORT_DELETE_FAILED: &str = "Erreur lors de la suppression du passeport";

    pub const INVOICE_GENERATED: &str = "Facture générée avec succès";
    pub const INVOICE_DELETED: &str = "Facture supprimée";
    pub const INVOICE_LOAD_FAILED: &str = "Erreur lors du chargement des factures";
    pub const INVOICE_GENERATE_FAILED: &str = "Erreur lors de la génération";
    pub const INVOICE_DELETE_FAILED: &str = "Erreur lors de la suppression";
    pub const INVOICE_TRAVEL_REQUIRED: &str = "Sélectionnez un voyage approuvé";
    pub const APPROVED_TRAVELS_LOAD_FAILED: &str =
        "Erreur lors du chargement des voyages approuvés";

    /// Map an HTTP status to its fixed message, or `default_message`.
    pub fn for_http_status(status: u16, default_message: &str) -> String {
        match status {
            400 => HTTP_400,
            401 => HTTP_401,
            403 => HTTP_403,
            404 => HTTP_404,
            500 => HTTP_500,
            _ => default_message,
        }
        .to_string()
    }
}
