// src/seed/role.rs

/// Roles a user can hold within an organization, ranked for deduplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Any role id not in the table below.
    Unranked,
    User,
    Requester,
    StorageManager,
    TenantAdmin,
    SuperAdmin,
}

const ROLE_IDS: &[(Role, &str)] = &[
    (Role::User, "1663d9f0-7b1e-417d-9349-4f2e19b6d1e8"),
    (Role::Requester, "98ac5906-8cf7-4c2d-b587-be350930f518"),
    (Role::StorageManager, "35feea56-b0a6-4011-b09f-85cb6f6727f3"),
    (Role::TenantAdmin, "700b7f8d-be79-474e-b554-6886a3605277"),
    (Role::SuperAdmin, "86234569-43e9-4a18-83cf-f8584d84a752"),
];

impl Role {
    pub fn from_id(role_id: &str) -> Self {
        ROLE_IDS
            .iter()
            .find(|(_, id)| *id == role_id)
            .map(|(role, _)| *role)
            .unwrap_or(Role::Unranked)
    }

    /// Role id as stored in `roles.id`; `None` for `Unranked`.
    pub fn id(&self) -> Option<&'static str> {
        ROLE_IDS
            .iter()
            .find(|(role, _)| role == self)
            .map(|(_, id)| *id)
    }

    /// Higher wins. Unknown roles rank 0.
    pub fn priority(&self) -> u8 {
        match self {
            Role::Unranked => 0,
            Role::User => 1,
            Role::Requester => 2,
            Role::StorageManager => 3,
            Role::TenantAdmin => 4,
            Role::SuperAdmin => 5,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Unranked => "unknown",
            Role::User => "user",
            Role::Requester => "requester",
            Role::StorageManager => "storage_manager",
            Role::TenantAdmin => "tenant_admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_both_ways() {
        for (role, id) in ROLE_IDS {
            assert_eq!(Role::from_id(id), *role);
            assert_eq!(role.id(), Some(*id));
        }
    }

    #[test]
    fn unknown_id_is_unranked() {
        let role = Role::from_id("00000000-0000-0000-0000-000000000000");
        assert_eq!(role, Role::Unranked);
        assert_eq!(role.priority(), 0);
        assert_eq!(role.id(), None);
        assert_eq!(role.as_str(), "unknown");
    }

    #[test]
    fn priorities_are_strictly_increasing() {
        let ranks: Vec<u8> = ROLE_IDS.iter().map(|(r, _)| r.priority()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert!(Role::SuperAdmin > Role::TenantAdmin);
    }
}
