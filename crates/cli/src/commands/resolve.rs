//! `partnerlogo resolve` — Mount a component, sync it, print the render.

use super::{CommandResult, load_config, open_store};
use crate::ResolveArgs;
use partnerlogo_core::asset::Variant;
use partnerlogo_resolver::{AssetSelection, LogoProps, LogoResolver, RefreshOutcome};
use partnerlogo_source::HttpAssetSource;
use std::sync::Arc;

pub async fn run(args: ResolveArgs) -> CommandResult {
    let config = load_config()?;
    let props = build_props(&args, &config.render)?;

    let source = Arc::new(HttpAssetSource::from_config(&config.service)?);
    let store = open_store(&config).await?;
    let resolver = LogoResolver::new(source, store).with_defaults(&config.assets);

    let instance = resolver.mount(&props.id).await;
    let outcome = instance.sync(props.asset_id()).await;
    let render = instance.render(&props).await;

    eprintln!("{} ({})", describe(&outcome), instance.key());
    println!("{}", serde_json::to_string_pretty(&render)?);

    Ok(())
}

fn build_props(
    args: &ResolveArgs,
    render: &partnerlogo_config::RenderConfig,
) -> Result<LogoProps, Box<dyn std::error::Error>> {
    if let Some(raw) = &args.props {
        let mut value: serde_json::Value = serde_json::from_str(raw)?;
        if let Some(object) = value.as_object_mut() {
            object.insert("id".into(), args.component_id.clone().into());
            object.entry("width").or_insert(render.width.into());
            object.entry("height").or_insert(render.height.into());
        }
        return Ok(serde_json::from_value(value)?);
    }

    let mut selection = AssetSelection {
        airline_id: args.airline.clone(),
        ota_id: args.ota.clone(),
        hotel_id: args.hotel.clone(),
        charge_card_id: args.card.clone(),
        ..AssetSelection::default()
    };
    if let Some(label) = &args.category {
        selection = selection.with_category_label(label);
    }

    let mut props = LogoProps::new(args.component_id.clone(), selection).with_size(render);
    props.asset_variant_index = Variant::try_from(args.variant)?;
    props.is_thumb = args.thumb;
    props.has_fill = args.fill;
    if args.radius < 0.0 {
        return Err(format!("radius must be >= 0 (got {})", args.radius).into());
    }
    props.radius = args.radius;
    Ok(props)
}

fn describe(outcome: &RefreshOutcome) -> String {
    match outcome {
        RefreshOutcome::CacheHit => "✅ Served from cache".into(),
        RefreshOutcome::NoSelection => "⚠️  No asset selected, showing defaults".into(),
        RefreshOutcome::Updated => "✅ Refreshed from service".into(),
        RefreshOutcome::InFlight => "⚠️  Fetch already running, showing previous state".into(),
        RefreshOutcome::Superseded => "⚠️  Refresh superseded".into(),
        RefreshOutcome::Failed(e) => format!("❌ Refresh failed, showing previous state: {e}"),
    }
}
