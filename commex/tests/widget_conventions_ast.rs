use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{ImplItem, Item, Type, UseTree, Visibility};

const WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let fs_modules = read_dir_sorted(&widgets_dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| file_stem(&path))
        .collect::<BTreeSet<_>>();

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), module, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, module: &str, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(module);

    for name in WIDGET_FILES {
        let path = dir.join(name);
        if !path.is_file() {
            violations.push(format!("{}: missing widget file", path.display()));
            continue;
        }
        validate_widget_source(&path, violations);
    }
    if !dir.join("view").is_dir() {
        violations.push(format!("{}: missing view directory", dir.display()));
    }

    let mod_rs = dir.join("mod.rs");
    if mod_rs.is_file() {
        validate_widget_root(&mod_rs, &prefix, violations);
    }

    let event_rs = dir.join("event.rs");
    if event_rs.is_file() {
        let enums = parse(&event_rs)
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
                _ => None,
            })
            .collect::<BTreeSet<_>>();
        for suffix in ["Intent", "Effect", "Event"] {
            let expected = format!("{prefix}{suffix}");
            if !enums.contains(&expected) {
                violations.push(format!(
                    "{}: expected event contract '{expected}'",
                    event_rs.display()
                ));
            }
        }
    }

    let reducer_rs = dir.join("reducer.rs");
    if reducer_rs.is_file() {
        let has_reduce = parse(&reducer_rs).items.iter().any(|item| {
            matches!(
                item,
                Item::Fn(item_fn)
                    if item_fn.sig.ident == "reduce"
                        && is_pub_crate(&item_fn.vis)
            )
        });
        if !has_reduce {
            violations.push(format!(
                "{}: expected pub(crate) fn reduce",
                reducer_rs.display()
            ));
        }
    }

    let view_dir = dir.join("view");
    for path in read_dir_sorted(&view_dir) {
        if path.extension().is_some_and(|ext| ext == "rs")
            && path.file_name().is_some_and(|name| name != "mod.rs")
        {
            validate_view_file(&path, violations);
        }
    }
}

fn validate_widget_root(
    mod_rs: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(mod_rs);
    let widget = format!("{prefix}Widget");
    let mut has_widget = false;
    let mut methods = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Struct(item_struct) if item_struct.ident == widget => {
                has_widget = true;
            },
            Item::Impl(item_impl) if impl_self_is(&item_impl.self_ty, &widget) => {
                for impl_item in &item_impl.items {
                    if let ImplItem::Fn(method) = impl_item {
                        methods.insert(method.sig.ident.to_string());
                    }
                }
            },
            Item::Mod(item_mod)
                if item_mod.ident == "view" && !is_pub_crate(&item_mod.vis) =>
            {
                violations.push(format!(
                    "{}: view module must be pub(crate)",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    if !has_widget {
        violations.push(format!(
            "{}: expected widget struct '{widget}'",
            mod_rs.display()
        ));
    }
    for method in ["new", "reduce", "vm"] {
        if !methods.contains(method) {
            violations.push(format!(
                "{}: '{widget}' must provide fn {method}",
                mod_rs.display()
            ));
        }
    }
}

fn validate_widget_source(path: &Path, violations: &mut Vec<String>) {
    let source = read(path);
    for forbidden in ["crate::app", "crate::routers"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: widgets must not depend on {forbidden}",
                path.display()
            ));
        }
    }
    for item in parse(path).items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    path.display()
                ));
            }
        }
    }
}

fn validate_view_file(path: &Path, violations: &mut Vec<String>) {
    validate_widget_source(path, violations);

    let source = read(path);
    for forbidden in [
        "log::",
        "std::fs::",
        "tokio::",
        "Task::",
        "iced::Task",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                path.display()
            ));
        }
    }

    let expected_prefix = file_stem(path)
        .map(|stem| snake_to_pascal_case(&stem))
        .unwrap_or_default();
    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in parse(path).items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            path.display()
        ));
    }
    if props_names.len() > 1 {
        violations.push(format!(
            "{}: expected at most one *Props type, found {props_names:?}",
            path.display()
        ));
    }
    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                path.display()
            ));
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn read_dir_sorted(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect::<Vec<_>>();
    paths.sort();
    paths
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
}

fn impl_self_is(self_ty: &Type, name: &str) -> bool {
    match self_ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name),
        _ => false,
    }
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
