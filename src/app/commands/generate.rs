//! Plugin scaffolding generation.
//!
//! Generation is split into planning and writing. Planning renders every
//! template into memory; writing only starts once the whole plan exists, so
//! a bad template or configuration never leaves a half-generated tree.

use std::collections::BTreeMap;

use minijinja::{Environment, Value, context};

use crate::app::AppContext;
use crate::domain::{
    Agent, AppError, ClassName, GeneratedFile, GenerationPlan, PROJECT_TEMPLATE, PluginConfig,
    PluginKind, ProfileRole, TargetLayout, ValidationError,
};
use crate::ports::{OutputStore, TemplateSource};

use crate::adapters::template_engine::{build_template_environment, render_template_by_name};

/// Options controlling how generation treats the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Reuse an existing output directory, overwriting files of the same name.
    pub force: bool,
    /// Render everything but write nothing.
    pub dry_run: bool,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub kind: PluginKind,
    pub class_name: ClassName,
    pub layout: TargetLayout,
    pub plan: GenerationPlan,
    /// False for dry runs.
    pub written: bool,
}

/// Execute the generate command.
pub fn execute<T, O>(
    ctx: &AppContext<T, O>,
    config: &PluginConfig,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    T: TemplateSource,
    O: OutputStore,
{
    let layout = TargetLayout::new(ctx.output().root())?;

    if ctx.output().exists() && !options.force {
        return Err(AppError::DirectoryExists(layout.root().to_path_buf()));
    }

    let plan = plan(ctx.templates(), config, &layout)?;

    if options.dry_run {
        return Ok(outcome(config, layout, plan, false));
    }

    write_plan(ctx.output(), &plan)?;
    Ok(outcome(config, layout, plan, true))
}

/// Render every output of `config` into a plan without touching the output tree.
pub fn plan<T: TemplateSource>(
    templates: &T,
    config: &PluginConfig,
    layout: &TargetLayout,
) -> Result<GenerationPlan, AppError> {
    let set = config.kind.templates();
    let mut names = vec![set.header, set.implementation];
    names.extend(set.profiles.iter().map(|profile| profile.template));
    names.push(PROJECT_TEMPLATE);
    let env = build_template_environment(templates, &names)?;

    let mut files = Vec::new();

    let class_ctx = class_context(config);
    let class_name = config.class_name.as_str();
    files.push(render(&env, set.header, layout.header_file(class_name), &class_ctx)?);
    files.push(render(
        &env,
        set.implementation,
        layout.implementation_file(class_name),
        &class_ctx,
    )?);

    for profile in set.profiles {
        let (file_name, profile_ctx) = profile_context(config, profile.role)?;
        let path = layout.profile_file(profile.role, &file_name);
        files.push(render(&env, profile.template, path, &profile_ctx)?);
    }

    let project_ctx = context! {
        projectname => layout.project_name(config.kind),
        classname => class_name,
        profile => BTreeMap::from([("type", config.kind.as_str())]),
    };
    files.push(render(&env, PROJECT_TEMPLATE, layout.project_file(), &project_ctx)?);

    Ok(GenerationPlan { directories: layout.directories(config.kind), files })
}

/// Create the planned directories, then write the planned files in order.
pub fn write_plan<O: OutputStore>(output: &O, plan: &GenerationPlan) -> Result<(), AppError> {
    for dir in &plan.directories {
        output.create_dir(dir)?;
    }
    for file in &plan.files {
        output.write_file(&file.path, &file.content)?;
    }
    Ok(())
}

fn outcome(
    config: &PluginConfig,
    layout: TargetLayout,
    plan: GenerationPlan,
    written: bool,
) -> GenerateOutcome {
    GenerateOutcome {
        kind: config.kind,
        class_name: config.class_name.clone(),
        layout,
        plan,
        written,
    }
}

fn render(
    env: &Environment<'_>,
    template: &str,
    path: String,
    ctx: &Value,
) -> Result<GeneratedFile, AppError> {
    let content = render_template_by_name(env, template, ctx)?;
    Ok(GeneratedFile { path, content })
}

fn class_context(config: &PluginConfig) -> Value {
    context! {
        plugin => &config.fields,
        classname => config.class_name.as_str(),
    }
}

/// File stem and template context for one profile document.
fn profile_context(
    config: &PluginConfig,
    role: ProfileRole,
) -> Result<(String, Value), AppError> {
    let profile_name = config.name.to_string();
    match role {
        ProfileRole::Sync => {
            let agent = required_agent(config)?;
            Ok((
                profile_name,
                context! {
                    profile => &config.fields,
                    storages => &config.storages,
                    agentname => agent.name.as_str(),
                    agentprops => &agent.props,
                    extprops => &config.ext_config,
                },
            ))
        }
        ProfileRole::Agent => {
            let agent = required_agent(config)?;
            Ok((
                agent.name.to_string(),
                context! {
                    name => agent.name.as_str(),
                    props => &agent.props,
                },
            ))
        }
        ProfileRole::Server => Ok((
            profile_name,
            context! {
                profile => &config.fields,
                storages => &config.storages,
                extprops => &config.ext_config,
            },
        )),
        ProfileRole::Storage => Ok((
            profile_name,
            context! {
                profile => &config.fields,
                extprops => &config.ext_config,
            },
        )),
    }
}

fn required_agent(config: &PluginConfig) -> Result<&Agent, AppError> {
    config
        .agent
        .as_ref()
        .ok_or_else(|| ValidationError::MissingSection("config.agent".to_string()).into())
}
