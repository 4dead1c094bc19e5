// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Fixed vocabularies used in query strings, headers and bodies
//!
//! Each member's `#[strum(serialize = "...")]` string is its wire string.
//! That one table drives `Display`, `FromStr`, the serde representation and
//! [`acc_marshal::WireEnum`], so a member can never serialize one way in a
//! body and another way in a query string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Implements `WireEnum`, `Serialize` and `Deserialize` from the strum table.
macro_rules! wire_enums {
    ($($ty:ident),+ $(,)?) => {
        acc_marshal::wire_enum!($($ty),+);
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    let wire: &'static str = (*self).into();
                    serializer.serialize_str(wire)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(|_| {
                        serde::de::Error::unknown_variant(&s, <$ty as VariantNames>::VARIANTS)
                    })
                }
            }
        )+
    };
}

/// Data-center region, sent in the `Region` header
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Region {
    #[strum(serialize = "US")]
    Us,
    #[strum(serialize = "EMEA")]
    Emea,
    #[strum(serialize = "AUS")]
    Aus,
    #[strum(serialize = "CAN")]
    Can,
    #[strum(serialize = "DEU")]
    Deu,
    #[strum(serialize = "IND")]
    Ind,
    #[strum(serialize = "JPN")]
    Jpn,
    #[strum(serialize = "GBR")]
    Gbr,
}

/// Platform a project was created on
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Platform {
    #[strum(serialize = "acc")]
    Acc,
    #[strum(serialize = "bim360")]
    Bim360,
}

/// Project classification
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Classification {
    #[strum(serialize = "production")]
    Production,
    #[strum(serialize = "template")]
    Template,
    #[strum(serialize = "component")]
    Component,
    #[strum(serialize = "sample")]
    Sample,
}

/// Project lifecycle status
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProjectStatus {
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "archived")]
    Archived,
    #[strum(serialize = "suspended")]
    Suspended,
}

/// Sort order for project listings
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProjectSortBy {
    #[strum(serialize = "name asc")]
    NameAsc,
    #[strum(serialize = "name desc")]
    NameDesc,
    #[strum(serialize = "startDate asc")]
    StartDateAsc,
    #[strum(serialize = "startDate desc")]
    StartDateDesc,
    #[strum(serialize = "endDate asc")]
    EndDateAsc,
    #[strum(serialize = "endDate desc")]
    EndDateDesc,
    #[strum(serialize = "type asc")]
    TypeAsc,
    #[strum(serialize = "type desc")]
    TypeDesc,
    #[strum(serialize = "status asc")]
    StatusAsc,
    #[strum(serialize = "status desc")]
    StatusDesc,
    #[strum(serialize = "jobNumber asc")]
    JobNumberAsc,
    #[strum(serialize = "jobNumber desc")]
    JobNumberDesc,
    #[strum(serialize = "createdAt asc")]
    CreatedAtAsc,
    #[strum(serialize = "createdAt desc")]
    CreatedAtDesc,
    #[strum(serialize = "updatedAt asc")]
    UpdatedAtAsc,
    #[strum(serialize = "updatedAt desc")]
    UpdatedAtDesc,
}

/// Project fields selectable with `fields=`
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProjectFields {
    #[strum(serialize = "accountId")]
    AccountId,
    #[strum(serialize = "addressLine1")]
    AddressLine1,
    #[strum(serialize = "addressLine2")]
    AddressLine2,
    #[strum(serialize = "businessUnitId")]
    BusinessUnitId,
    #[strum(serialize = "city")]
    City,
    #[strum(serialize = "classification")]
    Classification,
    #[strum(serialize = "companyCount")]
    CompanyCount,
    #[strum(serialize = "constructionType")]
    ConstructionType,
    #[strum(serialize = "contractType")]
    ContractType,
    #[strum(serialize = "country")]
    Country,
    #[strum(serialize = "createdAt")]
    CreatedAt,
    #[strum(serialize = "currentPhase")]
    CurrentPhase,
    #[strum(serialize = "deliveryMethod")]
    DeliveryMethod,
    #[strum(serialize = "endDate")]
    EndDate,
    #[strum(serialize = "imageUrl")]
    ImageUrl,
    #[strum(serialize = "jobNumber")]
    JobNumber,
    #[strum(serialize = "lastSignIn")]
    LastSignIn,
    #[strum(serialize = "latitude")]
    Latitude,
    #[strum(serialize = "longitude")]
    Longitude,
    #[strum(serialize = "memberCount")]
    MemberCount,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "platform")]
    Platform,
    #[strum(serialize = "postalCode")]
    PostalCode,
    #[strum(serialize = "products")]
    Products,
    #[strum(serialize = "projectValue")]
    ProjectValue,
    #[strum(serialize = "sheetCount")]
    SheetCount,
    #[strum(serialize = "startDate")]
    StartDate,
    #[strum(serialize = "stateOrProvince")]
    StateOrProvince,
    #[strum(serialize = "status")]
    Status,
    #[strum(serialize = "thumbnailImageUrl")]
    ThumbnailImageUrl,
    #[strum(serialize = "timezone")]
    Timezone,
    #[strum(serialize = "type")]
    Type,
    #[strum(serialize = "updatedAt")]
    UpdatedAt,
}

/// How `filter[...]` text values are compared
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum FilterTextMatch {
    #[strum(serialize = "contains")]
    Contains,
    #[strum(serialize = "startsWith")]
    StartsWith,
    #[strum(serialize = "endsWith")]
    EndsWith,
    #[strum(serialize = "equals")]
    Equals,
}

/// ACC / BIM 360 product keys
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Product {
    #[strum(serialize = "accountAdministration")]
    AccountAdministration,
    #[strum(serialize = "autoSpecs")]
    AutoSpecs,
    #[strum(serialize = "build")]
    Build,
    #[strum(serialize = "buildingConnected")]
    BuildingConnected,
    #[strum(serialize = "capitalPlanning")]
    CapitalPlanning,
    #[strum(serialize = "cloudWorksharing")]
    CloudWorksharing,
    #[strum(serialize = "collaboration")]
    Collaboration,
    #[strum(serialize = "cost")]
    Cost,
    #[strum(serialize = "designCollaboration")]
    DesignCollaboration,
    #[strum(serialize = "docs")]
    Docs,
    #[strum(serialize = "financials")]
    Financials,
    #[strum(serialize = "insight")]
    Insight,
    #[strum(serialize = "modelCoordination")]
    ModelCoordination,
    #[strum(serialize = "projectAdministration")]
    ProjectAdministration,
    #[strum(serialize = "takeoff")]
    Takeoff,
    #[strum(serialize = "workshopxr")]
    Workshopxr,
}

/// Access a project member has to one product
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProductAccessLevel {
    #[strum(serialize = "administrator")]
    Administrator,
    #[strum(serialize = "member")]
    Member,
    #[strum(serialize = "none")]
    NoAccess,
}

/// Membership status of a project user
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProjectUserStatus {
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "deleted")]
    Deleted,
}

/// Sort order for project user listings
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProjectUserSortBy {
    #[strum(serialize = "email asc")]
    EmailAsc,
    #[strum(serialize = "email desc")]
    EmailDesc,
    #[strum(serialize = "name asc")]
    NameAsc,
    #[strum(serialize = "name desc")]
    NameDesc,
    #[strum(serialize = "firstName asc")]
    FirstNameAsc,
    #[strum(serialize = "firstName desc")]
    FirstNameDesc,
    #[strum(serialize = "lastName asc")]
    LastNameAsc,
    #[strum(serialize = "lastName desc")]
    LastNameDesc,
    #[strum(serialize = "companyName asc")]
    CompanyNameAsc,
    #[strum(serialize = "companyName desc")]
    CompanyNameDesc,
    #[strum(serialize = "addedOn asc")]
    AddedOnAsc,
    #[strum(serialize = "addedOn desc")]
    AddedOnDesc,
    #[strum(serialize = "updatedAt asc")]
    UpdatedAtAsc,
    #[strum(serialize = "updatedAt desc")]
    UpdatedAtDesc,
}

/// Project user fields selectable with `fields=`
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum ProjectUserFields {
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "firstName")]
    FirstName,
    #[strum(serialize = "lastName")]
    LastName,
    #[strum(serialize = "autodeskId")]
    AutodeskId,
    #[strum(serialize = "companyId")]
    CompanyId,
    #[strum(serialize = "companyName")]
    CompanyName,
    #[strum(serialize = "roleIds")]
    RoleIds,
    #[strum(serialize = "roles")]
    Roles,
    #[strum(serialize = "status")]
    Status,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "jobTitle")]
    JobTitle,
    #[strum(serialize = "accessLevels")]
    AccessLevels,
    #[strum(serialize = "addedOn")]
    AddedOn,
    #[strum(serialize = "updatedAt")]
    UpdatedAt,
    #[strum(serialize = "products")]
    Products,
}

/// Account member status (`/hq/v1`)
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum AccountUserStatus {
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "inactive")]
    Inactive,
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "not_invited")]
    NotInvited,
}

/// Account-level role
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum AccountUserRole {
    #[strum(serialize = "account_admin")]
    AccountAdmin,
    #[strum(serialize = "account_user")]
    AccountUser,
    #[strum(serialize = "project_admin")]
    ProjectAdmin,
    #[strum(serialize = "project_user")]
    ProjectUser,
}

/// Combine search criteria with AND or OR
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum SearchOperator {
    #[strum(serialize = "AND")]
    And,
    #[strum(serialize = "OR")]
    Or,
}

/// Company trade
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
pub enum Trade {
    #[strum(serialize = "Architecture")]
    Architecture,
    #[strum(serialize = "Communications")]
    Communications,
    #[strum(serialize = "Communications | Data")]
    CommunicationsData,
    #[strum(serialize = "Concrete")]
    Concrete,
    #[strum(serialize = "Concrete Cast-in-Place")]
    ConcreteCastInPlace,
    #[strum(serialize = "Construction Management")]
    ConstructionManagement,
    #[strum(serialize = "Doors and Windows")]
    DoorsAndWindows,
    #[strum(serialize = "Drywall")]
    Drywall,
    #[strum(serialize = "Electrical")]
    Electrical,
    #[strum(serialize = "Electrical Power Generation")]
    ElectricalPowerGeneration,
    #[strum(serialize = "Elevator")]
    Elevator,
    #[strum(serialize = "Engineering")]
    Engineering,
    #[strum(serialize = "Fire Protection")]
    FireProtection,
    #[strum(serialize = "General Contractor")]
    GeneralContractor,
    #[strum(serialize = "HVAC Heating, Ventilating, & Air Conditioning")]
    Hvac,
    #[strum(serialize = "Landscaping")]
    Landscaping,
    #[strum(serialize = "Masonry")]
    Masonry,
    #[strum(serialize = "Mechanical")]
    Mechanical,
    #[strum(serialize = "Owner")]
    Owner,
    #[strum(serialize = "Painting & Coating")]
    PaintingAndCoating,
    #[strum(serialize = "Plumbing")]
    Plumbing,
    #[strum(serialize = "Roofing")]
    Roofing,
    #[strum(serialize = "Site Utilities")]
    SiteUtilities,
    #[strum(serialize = "Structural Steel")]
    StructuralSteel,
    #[strum(serialize = "Surveyor")]
    Surveyor,
}

wire_enums!(
    Region,
    Platform,
    Classification,
    ProjectStatus,
    ProjectSortBy,
    ProjectFields,
    FilterTextMatch,
    Product,
    ProductAccessLevel,
    ProjectUserStatus,
    ProjectUserSortBy,
    ProjectUserFields,
    AccountUserStatus,
    AccountUserRole,
    SearchOperator,
    Trade,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use acc_marshal::WireEnum;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn check_table<E>()
    where
        E: WireEnum + IntoEnumIterator + FromStr + PartialEq + Serialize + for<'de> Deserialize<'de>,
    {
        let mut seen = HashSet::new();
        for member in E::iter() {
            let wire = acc_marshal::wire_name(member).unwrap();
            assert!(!wire.is_empty(), "{}::{member:?} is blank", E::TYPE_NAME);
            assert!(seen.insert(wire), "{} reuses {wire:?}", E::TYPE_NAME);

            // The same string is used for FromStr and serde.
            assert!(E::from_str(wire).ok() == Some(member));
            let json = serde_json::to_string(&member).unwrap();
            assert_eq!(json, serde_json::to_string(wire).unwrap());
            assert!(serde_json::from_str::<E>(&json).unwrap() == member);
        }
    }

    #[test]
    fn test_all_tables_complete_and_distinct() {
        check_table::<Region>();
        check_table::<Platform>();
        check_table::<Classification>();
        check_table::<ProjectStatus>();
        check_table::<ProjectSortBy>();
        check_table::<ProjectFields>();
        check_table::<FilterTextMatch>();
        check_table::<Product>();
        check_table::<ProductAccessLevel>();
        check_table::<ProjectUserStatus>();
        check_table::<ProjectUserSortBy>();
        check_table::<ProjectUserFields>();
        check_table::<AccountUserStatus>();
        check_table::<AccountUserRole>();
        check_table::<SearchOperator>();
        check_table::<Trade>();
    }

    #[test]
    fn test_wire_strings_not_derivable_from_names() {
        assert_eq!(ProjectSortBy::NameAsc.to_string(), "name asc");
        assert_eq!(Trade::CommunicationsData.to_string(), "Communications | Data");
        assert_eq!(AccountUserStatus::NotInvited.to_string(), "not_invited");
        assert_eq!(Region::Emea.to_string(), "EMEA");
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = serde_json::from_str::<Platform>("\"bim361\"").unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
