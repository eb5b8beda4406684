//! Identity roles recognized by the client

/// Role granted by the identity provider.
///
/// The token may carry any number of other roles; only these five drive
/// client-side behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Officer,
    PManager,
    TManager,
    Member,
    HeadMarket,
}

crate::impl_wire_conversions!(Role {
    Officer => "ROLE_OFFICER",
    PManager => "ROLE_PMANAGER",
    TManager => "ROLE_TMANAGER",
    Member => "ROLE_MEMBER",
    HeadMarket => "ROLE_HEAD_MARKET",
});

impl Role {
    pub const ALL: [Self; 5] =
        [Self::Officer, Self::PManager, Self::TManager, Self::Member, Self::HeadMarket];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_names() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert_eq!(Role::HeadMarket.to_string(), "ROLE_HEAD_MARKET");
    }

    #[test]
    fn rejects_foreign_roles() {
        assert!("offline_access".parse::<Role>().is_err());
    }
}
