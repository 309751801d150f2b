use storefox_core::{AppConfig, Environment, Notification};

use super::*;
use crate::store::CreateStoreArgs;

fn test_config(token: Option<&str>, mapping_token: Option<&str>) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        api_base_url: storefox_core::DEFAULT_API_BASE_URL.to_string(),
        request_timeout_secs: 30,
        user_agent: "storefox-test/0.1".to_string(),
        token: token.map(str::to_string),
        mapping_token: mapping_token.map(str::to_string),
    }
}

fn create_args(cli: Cli) -> CreateStoreArgs {
    match cli.command {
        Some(Commands::Store {
            command: StoreCommands::Create(args),
        }) => args,
        other => panic!("expected store create, got: {other:?}"),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["storefox"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_store_create_with_all_fields() {
    let cli = Cli::try_parse_from([
        "storefox",
        "store",
        "create",
        "--name",
        "Downtown",
        "--city",
        "Austin",
        "--region",
        "TX",
        "--tenant-id",
        "42",
        "--device-id",
        "dev-1",
        "--token",
        "T",
    ])
    .expect("expected valid cli args");

    let args = create_args(cli);
    assert_eq!(args.name, "Downtown");
    assert_eq!(args.city, "Austin");
    assert_eq!(args.region, "TX");
    assert_eq!(args.tenant_id, "42");
    assert_eq!(args.device_id, "dev-1");
    assert_eq!(args.token.as_deref(), Some("T"));
}

#[test]
fn store_create_region_defaults_to_empty() {
    let cli = Cli::try_parse_from([
        "storefox",
        "store",
        "create",
        "--name",
        "N",
        "--city",
        "C",
        "--tenant-id",
        "1",
        "--device-id",
        "D",
    ])
    .unwrap();

    let args = create_args(cli);
    assert_eq!(args.region, "");
    assert!(args.token.is_none());
}

#[test]
fn store_create_requires_name() {
    let result = Cli::try_parse_from([
        "storefox",
        "store",
        "create",
        "--city",
        "C",
        "--tenant-id",
        "1",
        "--device-id",
        "D",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_device_map_without_device() {
    let cli = Cli::try_parse_from(["storefox", "device", "map"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Device {
            command: DeviceCommands::Map {
                device_id: None,
                token: None
            }
        })
    ));
}

#[test]
fn parses_device_map_with_device_and_token() {
    let cli = Cli::try_parse_from([
        "storefox",
        "device",
        "map",
        "--device-id",
        "dev-9",
        "--token",
        "M",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Device {
            command: DeviceCommands::Map {
                device_id: Some(ref d),
                token: Some(ref t)
            }
        }) if d == "dev-9" && t == "M"
    ));
}

#[test]
fn parses_notify_test() {
    let cli = Cli::try_parse_from(["storefox", "notify", "test"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Notify {
            command: NotifyCommands::Test
        })
    ));
}

#[test]
fn page_from_args_coerces_tenant_id() {
    let cli = Cli::try_parse_from([
        "storefox",
        "store",
        "create",
        "--name",
        "N",
        "--city",
        "C",
        "--tenant-id",
        "abc",
        "--device-id",
        "D",
        "--token",
        "T",
    ])
    .unwrap();
    let args = create_args(cli);

    let page = store::page_from_args(&test_config(None, None), &args).unwrap();
    assert_eq!(page.form.tenant_id, 0);
    assert_eq!(page.form.token, "T");
    assert_eq!(page.form.store_id, "");
}

#[test]
fn page_from_args_falls_back_to_config_token() {
    let cli = Cli::try_parse_from([
        "storefox",
        "store",
        "create",
        "--name",
        "N",
        "--city",
        "C",
        "--tenant-id",
        "5",
        "--device-id",
        "D",
    ])
    .unwrap();
    let args = create_args(cli);

    let page = store::page_from_args(&test_config(Some("from-env"), None), &args).unwrap();
    assert_eq!(page.form.token, "from-env");
    assert_eq!(page.form.tenant_id, 5);

    let err = store::page_from_args(&test_config(None, None), &args).unwrap_err();
    assert!(err.to_string().contains("STOREFOX_TOKEN"));
}

#[test]
fn page_for_mapping_prefers_flag_over_config() {
    let config = test_config(None, Some("env-mapping"));

    let page = device::page_for_mapping(&config, Some("dev-2"), Some("flag"));
    assert_eq!(page.mapping.device_id, "dev-2");
    assert_eq!(page.mapping.token, "flag");

    let page = device::page_for_mapping(&config, None, None);
    assert_eq!(page.mapping.device_id, "");
    assert_eq!(page.mapping.token, "env-mapping");
}

#[test]
fn console_render_includes_level_and_detail() {
    let plain = ConsoleNotifier::render(&Notification::info("This is a test notification!"));
    assert_eq!(plain, "[info] This is a test notification!");

    let detailed = ConsoleNotifier::render(
        &Notification::success("Device mapping updated successfully!").with_detail("2 mapped"),
    );
    assert_eq!(
        detailed,
        "[success] Device mapping updated successfully!\n    2 mapped"
    );
}

#[test]
fn tenant_id_coercion_is_flagged_only_without_leading_integer() {
    for raw in ["0", "00", "-0", "+0", "42"] {
        assert!(!store::tenant_id_was_coerced(raw), "raw: {raw:?}");
    }
    for raw in ["abc", "", "-"] {
        assert!(store::tenant_id_was_coerced(raw), "raw: {raw:?}");
    }
}
