//! Command definitions and handlers.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use jiff::Zoned;

use anjuan_core::casenum;
use anjuan_core::identity;
use anjuan_core::models::case::CaseType;
use anjuan_core::models::interview::InterviewForm;
use anjuan_core::models::person::PersonType;
use anjuan_render::{install_starter_templates, TemplateKind};
use anjuan_router::{
    decide_self, decide_witness, execute, resolve, scan, Resolution, SelfChoice, SelfResolution,
    SessionContext, WitnessChoice, WitnessResolution,
};
use anjuan_store::index::{CaseIndexStore, CaseMatch};
use anjuan_store::reference::{ReferenceCategory, ReferenceList};

use crate::config;
use crate::opener;
use crate::prompt;

#[derive(Parser)]
#[command(name = "anjuan")]
#[command(about = "工伤案卷: work-injury interview records", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one interview from a filled form file
    Interview(InterviewArgs),
    /// Derive age and gender from an identity number
    ParseId {
        id: String,
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        today: Option<String>,
    },
    /// Preview the next case number a person would get
    NextNumber {
        name: String,
        /// 个人申请 case
        #[arg(long)]
        individual: bool,
        /// 死亡 case
        #[arg(long)]
        death: bool,
        /// Case root (overrides the configured one)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Print a blank interview form to fill in
    InitForm {
        /// Write to this file instead of stdout
        path: Option<PathBuf>,
    },
    /// Inspect the case index
    #[command(subcommand)]
    Index(IndexCommand),
    /// Maintain the reference name lists
    #[command(subcommand)]
    Refs(RefsCommand),
    /// Check or install the record templates
    #[command(subcommand)]
    Templates(TemplatesCommand),
    /// Operator settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct InterviewArgs {
    /// Path to the filled form JSON
    pub form: PathBuf,
    /// Case root (overrides the configured one)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Templates directory (default: {case root}/templates)
    #[arg(long)]
    pub templates: Option<PathBuf>,
    /// Do not hand the document to the OS viewer
    #[arg(long)]
    pub no_open: bool,
    /// Non-interactive answer when the person is already on file
    #[arg(long, value_enum)]
    pub on_match: Option<MatchAnswer>,
    /// Non-interactive answer when the injured worker has no case folder
    #[arg(long, value_enum)]
    pub on_missing_folder: Option<ConfirmAnswer>,
    /// Non-interactive answer when this witness already has a record
    #[arg(long, value_enum)]
    pub on_existing_witness: Option<WitnessAnswer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchAnswer {
    /// Continue in the most recent matching case
    UseLatest,
    /// Open a fresh case
    New,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfirmAnswer {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WitnessAnswer {
    /// Reopen the existing record
    Open,
    /// Take another statement
    New,
    Cancel,
}

#[derive(Subcommand)]
pub enum IndexCommand {
    /// List every case on file
    List {
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Find a person's cases by name and optional identity number
    Find {
        name: String,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum RefsCommand {
    /// Print a list's entries
    List {
        /// employer | work-unit | workplace (Chinese names accepted)
        category: String,
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Add a name to a list
    Add {
        category: String,
        name: String,
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Remove a name from a list
    Remove {
        category: String,
        name: String,
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TemplatesCommand {
    /// Show which template files exist
    List {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Templates directory (default: {case root}/templates)
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Write the built-in starter templates
    Install {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Templates directory (default: {case root}/templates)
        #[arg(long)]
        templates: Option<PathBuf>,
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the stored settings (key redacted)
    Show,
    /// Update settings; only the given flags change
    Set {
        #[arg(long)]
        operator: Option<String>,
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        remember: Option<bool>,
        #[arg(long)]
        case_root: Option<PathBuf>,
    },
    /// Forget operator and API settings; the case root is kept
    Clear,
}

pub fn run(cli: Cli) -> eyre::Result<()> {
    match cli.command {
        Commands::Interview(args) => run_interview(args),
        Commands::ParseId { id, today } => run_parse_id(&id, today.as_deref()),
        Commands::NextNumber {
            name,
            individual,
            death,
            root,
        } => run_next_number(&name, individual, death, root),
        Commands::InitForm { path } => run_init_form(path.as_deref()),
        Commands::Index(cmd) => run_index(cmd),
        Commands::Refs(cmd) => run_refs(cmd),
        Commands::Templates(cmd) => run_templates(cmd),
        Commands::Config(cmd) => run_config(cmd),
    }
}

fn run_interview(args: InterviewArgs) -> eyre::Result<()> {
    let settings = config::load_config()?;
    let case_root = args.root.unwrap_or_else(|| settings.case_root());
    let templates = args
        .templates
        .unwrap_or_else(|| case_root.join("templates"));

    let text = fs::read_to_string(&args.form)
        .map_err(|e| eyre::eyre!("failed to read form at {}: {e}", args.form.display()))?;
    let form: InterviewForm = serde_json::from_str(&text)?;

    let ctx = SessionContext::new(case_root, templates).with_operator(settings.operator.clone());
    let store = CaseIndexStore::for_root(&ctx.case_root);

    let plan = match resolve(&ctx, &form, &store)? {
        Resolution::SelfInterview(SelfResolution::NewCase(plan)) => Some(plan),
        Resolution::SelfInterview(SelfResolution::ExistingCases(matches)) => {
            println!("该人员已有案件记录:");
            print_matches(&matches);
            let choice = match args.on_match {
                Some(MatchAnswer::UseLatest) => SelfChoice::UseExisting(matches.len() - 1),
                Some(MatchAnswer::New) => SelfChoice::StartNew,
                Some(MatchAnswer::Cancel) => SelfChoice::Cancel,
                None => prompt::choose_case(&matches)?,
            };
            decide_self(&ctx, &form, &matches, choice)?
        }
        Resolution::Witness(resolution) => {
            let choice = match &resolution {
                WitnessResolution::Ready(_) => WitnessChoice::CreateNew,
                WitnessResolution::NoCaseFolder { injured, proposed } => {
                    println!(
                        "受伤职工 {injured} 尚无案件文件夹，将创建 {}",
                        proposed.case_number
                    );
                    let confirmed = match args.on_missing_folder {
                        Some(ConfirmAnswer::Yes) => true,
                        Some(ConfirmAnswer::No) => false,
                        None => prompt::confirm("创建新案件文件夹?")?,
                    };
                    if confirmed {
                        WitnessChoice::CreateNew
                    } else {
                        WitnessChoice::Cancel
                    }
                }
                WitnessResolution::ExistingWitnessDoc { existing, .. } => {
                    println!("该证人已有笔录: {}", existing.path.display());
                    match args.on_existing_witness {
                        Some(WitnessAnswer::Open) => WitnessChoice::OpenExisting,
                        Some(WitnessAnswer::New) => WitnessChoice::CreateNew,
                        Some(WitnessAnswer::Cancel) => WitnessChoice::Cancel,
                        None => prompt::witness_choice()?,
                    }
                }
            };
            decide_witness(resolution, choice)
        }
        Resolution::LegalEntity(plan) => Some(plan),
    };

    let Some(plan) = plan else {
        println!("已取消，未生成笔录。");
        return Ok(());
    };

    let report = execute(&plan, &ctx, &store)?;
    record_reference_names(&ctx.case_root, &form)?;

    if report.rendered.is_empty() {
        if let Some(path) = &report.open_path {
            println!("已有笔录: {}", path.display());
        }
    } else {
        println!("笔录生成完成: {}", plan.case_number);
    }

    if !args.no_open {
        if let Some(path) = &report.open_path {
            opener::open_document(path)?;
        }
    }
    Ok(())
}

fn print_matches(matches: &[CaseMatch]) {
    for (i, m) in matches.iter().enumerate() {
        println!(
            "  {}. {} {} {} ({})",
            i + 1,
            m.record.case_number,
            m.record.case_type.label(),
            m.record.created_date,
            m.kind.label()
        );
    }
}

/// New employer, work-unit, and workplace names from the form feed the
/// autocomplete lists.
fn record_reference_names(case_root: &Path, form: &InterviewForm) -> eyre::Result<()> {
    for (category, value) in [
        (ReferenceCategory::Employer, form.employer.as_str()),
        (ReferenceCategory::WorkUnit, form.work_unit.as_str()),
        (ReferenceCategory::Workplace, form.workplace.as_str()),
    ] {
        let list = ReferenceList::new(case_root, category);
        if list.append(value)? {
            tracing::debug!(category = category.label(), value, "reference name recorded");
        }
    }
    Ok(())
}

fn run_parse_id(id: &str, today: Option<&str>) -> eyre::Result<()> {
    let today = match today {
        Some(s) => s.parse::<Date>()?,
        None => Zoned::now().date(),
    };
    let profile = identity::parse(id.trim(), today);
    let gender = profile
        .gender
        .map(|g| g.label().to_string())
        .unwrap_or_else(|| "未知".to_string());
    let age = profile
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "未知".to_string());
    println!("性别: {gender}");
    println!("年龄: {age}");
    Ok(())
}

fn run_next_number(
    name: &str,
    individual: bool,
    death: bool,
    root: Option<PathBuf>,
) -> eyre::Result<()> {
    let settings = config::load_config()?;
    let case_root = root.unwrap_or_else(|| settings.case_root());
    let templates = case_root.join("templates");
    let ctx = SessionContext::new(case_root, templates);
    let names = scan::year_folder_names(&ctx)?;
    let case_type = CaseType::from_flags(individual, death);
    println!("{}", casenum::generate(case_type, name.trim(), &names));
    Ok(())
}

fn run_init_form(path: Option<&Path>) -> eyre::Result<()> {
    let form = InterviewForm {
        person_type: PersonType::SelfParty,
        regulation_index: Some(0),
        ..InterviewForm::default()
    };
    let json = serde_json::to_string_pretty(&form)?;
    match path {
        Some(path) => {
            fs::write(path, json.as_bytes())?;
            println!("表单已写入: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_index(cmd: IndexCommand) -> eyre::Result<()> {
    match cmd {
        IndexCommand::List { root } => {
            let store = store_at(root)?;
            let index = store.load();
            for record in &index.cases {
                println!(
                    "{} {} {} {}",
                    record.case_number,
                    record.person_name,
                    record.case_type.label(),
                    record.created_date
                );
            }
            println!("共 {} 件", index.total_cases);
            if !index.last_update.is_empty() {
                println!("最近更新: {}", index.last_update);
            }
            Ok(())
        }
        IndexCommand::Find { name, id, root } => {
            let store = store_at(root)?;
            let matches = store.find_by_name_and_id(name.trim(), id.as_deref());
            if matches.is_empty() {
                println!("未找到记录");
                return Ok(());
            }
            print_matches(&matches);
            Ok(())
        }
    }
}

fn store_at(root: Option<PathBuf>) -> eyre::Result<CaseIndexStore> {
    let settings = config::load_config()?;
    let case_root = root.unwrap_or_else(|| settings.case_root());
    Ok(CaseIndexStore::for_root(&case_root))
}

fn run_refs(cmd: RefsCommand) -> eyre::Result<()> {
    match cmd {
        RefsCommand::List { category, root } => {
            let list = reference_list(&category, root)?;
            for name in list.load() {
                println!("{name}");
            }
            Ok(())
        }
        RefsCommand::Add {
            category,
            name,
            root,
        } => {
            let list = reference_list(&category, root)?;
            if list.append(&name)? {
                println!("已添加: {name}");
            } else {
                println!("已存在: {name}");
            }
            Ok(())
        }
        RefsCommand::Remove {
            category,
            name,
            root,
        } => {
            let list = reference_list(&category, root)?;
            if list.remove(&name)? {
                println!("已删除: {name}");
            } else {
                println!("未找到: {name}");
            }
            Ok(())
        }
    }
}

fn reference_list(category: &str, root: Option<PathBuf>) -> eyre::Result<ReferenceList> {
    let settings = config::load_config()?;
    let case_root = root.unwrap_or_else(|| settings.case_root());
    let category = category.parse::<ReferenceCategory>()?;
    Ok(ReferenceList::new(&case_root, category))
}

fn run_templates(cmd: TemplatesCommand) -> eyre::Result<()> {
    match cmd {
        TemplatesCommand::List { root, templates } => {
            let dir = templates_dir_at(root, templates)?;
            for kind in TemplateKind::ALL {
                let path = dir.join(kind.file_name());
                let status = if path.is_file() { "存在" } else { "缺失" };
                println!("{status}  {}", path.display());
            }
            Ok(())
        }
        TemplatesCommand::Install {
            root,
            templates,
            force,
        } => {
            let dir = templates_dir_at(root, templates)?;
            let written = install_starter_templates(&dir, force)?;
            if written.is_empty() {
                println!("模板已齐全: {}", dir.display());
            } else {
                for path in &written {
                    println!("已写入: {}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn templates_dir_at(root: Option<PathBuf>, templates: Option<PathBuf>) -> eyre::Result<PathBuf> {
    if let Some(dir) = templates {
        return Ok(dir);
    }
    let settings = config::load_config()?;
    let case_root = root.unwrap_or_else(|| settings.case_root());
    Ok(case_root.join("templates"))
}

fn run_config(cmd: ConfigCommand) -> eyre::Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let settings = config::load_config()?;
            let info = config::config_info(&settings);
            println!("操作员: {}", info.operator);
            println!("API 地址: {}", info.api_url);
            println!(
                "API 密钥: {}",
                info.api_key_hint.unwrap_or_else(|| "未保存".to_string())
            );
            println!("记住密钥: {}", if info.remember { "是" } else { "否" });
            println!("案卷根目录: {}", info.case_root);
            Ok(())
        }
        ConfigCommand::Set {
            operator,
            api_url,
            api_key,
            remember,
            case_root,
        } => {
            let mut settings = config::load_config()?;
            if let Some(operator) = operator {
                settings.operator = operator;
            }
            if let Some(api_url) = api_url {
                settings.api_url = api_url;
            }
            if let Some(remember) = remember {
                settings.remember = remember;
            }
            if let Some(api_key) = api_key {
                settings.set_api_key(&api_key);
            } else if !settings.remember {
                settings.api_key_encoded = None;
            }
            if let Some(case_root) = case_root {
                settings.case_root = case_root.display().to_string();
            }
            config::save_config(&settings)?;
            println!("设置已保存");
            Ok(())
        }
        ConfigCommand::Clear => {
            let mut settings = config::load_config()?;
            config::clear_config(&mut settings);
            config::save_config(&settings)?;
            println!("设置已清除");
            Ok(())
        }
    }
}
