//! Property controls for the host inspector.
//!
//! The inspector itself lives in the host; this module only describes which
//! options it should offer. Each category gets its own identifier enum,
//! shown only while that category is selected.

use crate::index::CatalogIndex;
use partnerlogo_core::asset::Variant;
use partnerlogo_core::catalog::Category;
use serde::Serialize;

/// Initial values the inspector shows before anything is chosen.
#[derive(Debug, Clone)]
pub struct ControlDefaults {
    /// Preselected airline asset
    pub airline_id: String,
}

/// A single inspector property.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Prop name the value is bound to
    pub prop: &'static str,

    pub title: &'static str,

    #[serde(flatten)]
    pub kind: ControlKind,

    /// Shown only while this category is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_for: Option<Category>,
}

/// Control type plus its type-specific settings.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlKind {
    #[serde(rename_all = "camelCase")]
    Enum {
        options: Vec<serde_json::Value>,
        option_titles: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        default_value: Option<serde_json::Value>,
        display_segmented_control: bool,
    },
    #[serde(rename_all = "camelCase")]
    Boolean {
        default_value: bool,
        enabled_title: &'static str,
        disabled_title: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Number {
        default_value: f64,
        min: f64,
        display_stepper: bool,
    },
}

impl Control {
    /// Whether the control is visible for the currently selected category.
    pub fn is_visible(&self, selected: Category) -> bool {
        self.visible_for.is_none_or(|category| category == selected)
    }
}

fn identifier_prop(category: Category) -> &'static str {
    match category {
        Category::Airline => "airlineID",
        Category::Ota => "otaID",
        Category::Hotel => "hotelID",
        Category::Payment => "chargeCardID",
    }
}

/// Build the full control list from the catalog.
pub fn property_controls(catalog: &CatalogIndex, defaults: &ControlDefaults) -> Vec<Control> {
    let mut controls = vec![Control {
        prop: "category",
        title: "Category",
        kind: ControlKind::Enum {
            options: Category::ALL
                .iter()
                .map(|c| serde_json::Value::from(c.prefix()))
                .collect(),
            option_titles: Category::ALL.iter().map(|c| c.prefix().to_string()).collect(),
            default_value: Some(Category::Airline.prefix().into()),
            display_segmented_control: false,
        },
        visible_for: None,
    }];

    for category in Category::ALL {
        let (ids, titles) = catalog.options(category);
        let default_value = match category {
            Category::Airline => Some(serde_json::Value::from(defaults.airline_id.clone())),
            _ => None,
        };
        controls.push(Control {
            prop: identifier_prop(category),
            title: "Logo",
            kind: ControlKind::Enum {
                options: ids.into_iter().map(serde_json::Value::from).collect(),
                option_titles: titles,
                default_value,
                display_segmented_control: false,
            },
            visible_for: Some(category),
        });
    }

    let variants = [Variant::Colour, Variant::White];
    controls.push(Control {
        prop: "assetVariantIndex",
        title: "Version",
        kind: ControlKind::Enum {
            options: variants.iter().map(|v| serde_json::Value::from(v.index())).collect(),
            option_titles: variants.iter().map(|v| v.title().to_string()).collect(),
            default_value: Some(serde_json::Value::from(Variant::default().index())),
            display_segmented_control: true,
        },
        visible_for: None,
    });

    controls.push(Control {
        prop: "isThumb",
        title: "Format",
        kind: ControlKind::Boolean {
            default_value: false,
            enabled_title: "Thumbnail",
            disabled_title: "Default",
        },
        visible_for: None,
    });

    controls.push(Control {
        prop: "hasFill",
        title: "Background",
        kind: ControlKind::Boolean {
            default_value: false,
            enabled_title: "Colour",
            disabled_title: "None",
        },
        visible_for: None,
    });

    controls.push(Control {
        prop: "radius",
        title: "Radius",
        kind: ControlKind::Number {
            default_value: 0.0,
            min: 0.0,
            display_stepper: true,
        },
        visible_for: None,
    });

    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use partnerlogo_core::catalog::AssetRecord;

    fn controls() -> Vec<Control> {
        let catalog = CatalogIndex::new(vec![
            AssetRecord::new("a2", "Virgin America", "Airline"),
            AssetRecord::new("a1", "British Airways", "Airline"),
            AssetRecord::new("h1", "Hilton", "Hotel"),
        ]);
        property_controls(
            &catalog,
            &ControlDefaults {
                airline_id: "a2".into(),
            },
        )
    }

    fn find<'a>(controls: &'a [Control], prop: &str) -> &'a Control {
        controls.iter().find(|c| c.prop == prop).unwrap()
    }

    #[test]
    fn one_identifier_control_per_category() {
        let controls = controls();
        for prop in ["airlineID", "otaID", "hotelID", "chargeCardID"] {
            assert!(find(&controls, prop).visible_for.is_some(), "{prop}");
        }
    }

    #[test]
    fn identifier_options_come_from_catalog() {
        let controls = controls();
        match &find(&controls, "airlineID").kind {
            ControlKind::Enum {
                options,
                option_titles,
                default_value,
                ..
            } => {
                assert_eq!(options, &vec![serde_json::json!("a1"), serde_json::json!("a2")]);
                assert_eq!(option_titles, &vec!["British Airways", "Virgin America"]);
                assert_eq!(default_value, &Some(serde_json::json!("a2")));
            }
            other => panic!("expected enum control, got {other:?}"),
        }
    }

    #[test]
    fn identifier_visibility_follows_category() {
        let controls = controls();
        let hotel = find(&controls, "hotelID");
        assert!(hotel.is_visible(Category::Hotel));
        assert!(!hotel.is_visible(Category::Airline));
        assert!(find(&controls, "radius").is_visible(Category::Payment));
    }

    #[test]
    fn serializes_for_the_inspector() {
        let json = serde_json::to_value(controls()).unwrap();
        let variant = json
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["prop"] == "assetVariantIndex")
            .unwrap();
        assert_eq!(variant["type"], "enum");
        assert_eq!(variant["options"], serde_json::json!([0, 1]));
        assert_eq!(variant["optionTitles"], serde_json::json!(["Colour", "White"]));
        assert_eq!(variant["displaySegmentedControl"], true);

        let fill = json
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["prop"] == "hasFill")
            .unwrap();
        assert_eq!(fill["type"], "boolean");
        assert_eq!(fill["enabledTitle"], "Colour");
        assert_eq!(fill["disabledTitle"], "None");
    }

    #[test]
    fn radius_has_zero_floor() {
        let controls = controls();
        match find(&controls, "radius").kind {
            ControlKind::Number { min, .. } => assert_eq!(min, 0.0),
            ref other => panic!("expected number control, got {other:?}"),
        }
    }
}
