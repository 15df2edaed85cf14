//! 跨境数据治理控制台 CLI

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use crossgate_client::{ClientConfig, CrossgateClient, ExportFormat, FileSessionStore, ListQuery};
use serde::Serialize;
use shared::models::{ConfigType, DesensitizationRequest, UserRoleAssign};
use shared::{BatchOutcome, DEFAULT_PAGE_SIZE, ResourcePage};

#[derive(Parser)]
#[command(name = "crossgate")]
#[command(about = "跨境数据治理控制台客户端", long_about = None)]
struct Cli {
    /// 服务器地址
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    server: String,

    /// 会话状态目录
    #[arg(long, default_value = ".crossgate")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 用户登录
    Login {
        /// 用户名
        #[arg(short, long)]
        username: String,
        /// 密码
        #[arg(short, long)]
        password: String,
    },
    /// 用户登出
    Logout,
    /// 当前用户信息
    Whoami,
    /// 当前用户权限列表
    Permissions,
    /// 数据资产管理
    Assets {
        #[command(subcommand)]
        command: AssetsCommand,
    },
    /// 出境场景管理
    Scenarios {
        #[command(subcommand)]
        command: ScenariosCommand,
    },
    /// 风险评估管理
    Risk {
        #[command(subcommand)]
        command: RiskCommand,
    },
    /// 传输审批管理
    Approvals {
        #[command(subcommand)]
        command: ApprovalsCommand,
    },
    /// 审计日志
    Audit {
        #[command(subcommand)]
        command: AuditCommand,
    },
    /// 用户管理
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
    /// 角色管理
    Roles {
        #[command(subcommand)]
        command: RolesCommand,
    },
    /// 通知中心
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },
    /// 系统配置
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// 拦截与脱敏
    Interception {
        #[command(subcommand)]
        command: InterceptionCommand,
    },
    /// 看板总览
    Dashboard {
        /// 统计天数
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
}

/// 列表查询参数（页码、页大小、key=value 过滤条件）。
#[derive(Args)]
struct ListArgs {
    /// 页码（从 1 开始）
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    /// 每页条数
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,
    /// 过滤条件（key=value，可重复）
    #[arg(short, long)]
    filter: Vec<String>,
}

impl ListArgs {
    fn to_query(&self) -> anyhow::Result<ListQuery> {
        let mut query = ListQuery::new();
        for pair in &self.filter {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("过滤条件格式应为 key=value: {}", pair))?;
            query = query.with_filter(key, value);
        }
        // 过滤条件会重置页码，因此分页放在最后
        Ok(query.with_limit(self.page_size).with_page(self.page))
    }
}

#[derive(Subcommand)]
enum AssetsCommand {
    /// 资产列表
    List(ListArgs),
    /// 从 JSON 文件创建资产
    Create {
        /// 资产 JSON 文件路径
        #[arg(short, long)]
        file: PathBuf,
    },
    /// 触发资产扫描
    Scan {
        /// 仅扫描指定源系统
        #[arg(long)]
        source_system: Option<String>,
    },
    /// 血缘图谱
    Lineage {
        /// 资产 ID
        id: i64,
        /// 血缘深度（1-5）
        #[arg(short, long, default_value_t = 2)]
        depth: u32,
    },
    /// 导出资产清单
    Export {
        /// 导出格式（csv 或 json）
        #[arg(long, default_value = "csv")]
        format: String,
        /// 输出目录
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum ScenariosCommand {
    /// 场景列表
    List(ListArgs),
    /// 提交审批
    Submit { id: i64 },
    /// 批准场景
    Approve {
        id: i64,
        /// 审批人 ID
        #[arg(long)]
        approver: i64,
        /// 审批意见
        #[arg(long)]
        comment: Option<String>,
    },
    /// 拒绝场景（必须给出原因）
    Reject {
        id: i64,
        /// 审批人 ID
        #[arg(long)]
        approver: i64,
        /// 拒绝原因
        #[arg(long)]
        reason: String,
    },
    /// 批量批准
    BatchApprove {
        /// 场景 ID 列表（逗号分隔）
        #[arg(long, value_delimiter = ',')]
        ids: Vec<i64>,
        /// 审批人 ID
        #[arg(long)]
        approver: i64,
        /// 审批意见
        #[arg(long)]
        comment: Option<String>,
    },
    /// 批量拒绝（共用一个原因）
    BatchReject {
        /// 场景 ID 列表（逗号分隔）
        #[arg(long, value_delimiter = ',')]
        ids: Vec<i64>,
        /// 审批人 ID
        #[arg(long)]
        approver: i64,
        /// 拒绝原因
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand)]
enum RiskCommand {
    /// 评估列表
    List(ListArgs),
    /// 重新计算评估得分
    Calculate { id: i64 },
    /// 阈值检查
    ThresholdCheck { id: i64 },
}

#[derive(Subcommand)]
enum ApprovalsCommand {
    /// 审批列表
    List(ListArgs),
    /// 批准传输
    Approve {
        id: i64,
        /// 审批人 ID
        #[arg(long)]
        approver: i64,
        /// 审批意见
        #[arg(long)]
        comment: Option<String>,
    },
    /// 拒绝传输（必须给出原因）
    Reject {
        id: i64,
        /// 审批人 ID
        #[arg(long)]
        approver: i64,
        /// 拒绝原因
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand)]
enum AuditCommand {
    /// 日志列表
    List(ListArgs),
    /// 操作统计
    Stats {
        /// 统计天数
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
    /// 异常行为
    Anomalies(ListArgs),
}

#[derive(Subcommand)]
enum UsersCommand {
    /// 用户列表
    List(ListArgs),
    /// 删除用户
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum RolesCommand {
    /// 角色列表
    List,
    /// 为用户分配角色
    Assign {
        /// 用户 ID
        #[arg(long)]
        user: i64,
        /// 角色 ID 列表（逗号分隔）
        #[arg(long, value_delimiter = ',')]
        roles: Vec<i64>,
    },
}

#[derive(Subcommand)]
enum NotificationsCommand {
    /// 通知列表
    List(ListArgs),
    /// 标记已读
    Read { id: i64 },
    /// 全部标记已读
    ReadAll,
    /// 未读统计
    Stats,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// 配置列表
    List(ListArgs),
    /// 按键读取配置
    Get { key: String },
    /// 按键写入配置（先做类型校验）
    Set {
        key: String,
        value: String,
        /// 值类型（string/integer/float/boolean/json）
        #[arg(short = 't', long = "type", default_value = "string")]
        config_type: String,
    },
}

#[derive(Subcommand)]
enum InterceptionCommand {
    /// 白名单
    Whitelist {
        /// 将审批加入白名单
        #[arg(long)]
        add: Option<i64>,
        /// 将审批移出白名单
        #[arg(long)]
        remove: Option<i64>,
    },
    /// 黑名单
    Blacklist {
        /// 将资产加入黑名单
        #[arg(long)]
        add: Option<i64>,
        /// 加入黑名单的原因
        #[arg(long)]
        reason: Option<String>,
        /// 将资产移出黑名单
        #[arg(long)]
        remove: Option<i64>,
    },
    /// 对 JSON 文件中的字段脱敏
    Desensitize {
        /// 请求 JSON 文件路径
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crossgate=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(server = %cli.server, "console starting");

    let session = Arc::new(FileSessionStore::new(&cli.state_dir));
    let client = CrossgateClient::new(&ClientConfig::new(&cli.server), session)?
        .with_session_expired_hook(Arc::new(|| {
            eprintln!("会话已过期，请重新登录: crossgate login");
        }));

    match cli.command {
        Commands::Login { username, password } => {
            client.login(&username, &password).await?;
            println!("登录成功: {}", username);
        }
        Commands::Logout => {
            client.logout();
            println!("已登出");
        }
        Commands::Whoami => {
            let me = client.me().await?;
            print_json(&me)?;
        }
        Commands::Permissions => {
            let granted = client.auth().my_permissions().await?;
            let mut count = 0;
            for permission in shared::permissions::ALL_PERMISSIONS {
                if shared::permissions::has_permission(&granted, permission) {
                    println!("✓ {}", permission);
                    count += 1;
                } else {
                    println!("  {}", permission);
                }
            }
            println!("已授予 {} / {} 项权限", count, shared::permissions::ALL_PERMISSIONS.len());
        }
        Commands::Assets { command } => run_assets(&client, command).await?,
        Commands::Scenarios { command } => run_scenarios(&client, command).await?,
        Commands::Risk { command } => run_risk(&client, command).await?,
        Commands::Approvals { command } => run_approvals(&client, command).await?,
        Commands::Audit { command } => run_audit(&client, command).await?,
        Commands::Users { command } => run_users(&client, command).await?,
        Commands::Roles { command } => run_roles(&client, command).await?,
        Commands::Notifications { command } => run_notifications(&client, command).await?,
        Commands::Config { command } => run_config(&client, command).await?,
        Commands::Interception { command } => run_interception(&client, command).await?,
        Commands::Dashboard { days } => run_dashboard(&client, days).await?,
    }

    Ok(())
}

async fn run_assets(client: &CrossgateClient, command: AssetsCommand) -> anyhow::Result<()> {
    let assets = client.data_assets();
    match command {
        AssetsCommand::List(args) => {
            let page = assets.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        AssetsCommand::Create { file } => {
            let payload = read_payload(&file)?;
            let created = assets.create(&payload).await?;
            println!("资产已创建: {} ({})", created.asset_name, created.id);
        }
        AssetsCommand::Scan { source_system } => {
            let response = assets.scan(source_system.as_deref()).await?;
            println!("{}", response.message);
        }
        AssetsCommand::Lineage { id, depth } => {
            let graph = assets.lineage(id, depth).await?;
            if graph.is_empty() {
                println!("该资产暂无血缘关系");
            } else {
                print_json(&graph)?;
            }
        }
        AssetsCommand::Export { format, out } => {
            let format = parse_export_format(&format)?;
            let file = client.export().download("data-assets", format).await?;
            let path = file.save_to(&out)?;
            println!("导出已保存到: {}", path.display());
        }
    }
    Ok(())
}

async fn run_scenarios(client: &CrossgateClient, command: ScenariosCommand) -> anyhow::Result<()> {
    let scenarios = client.scenarios();
    match command {
        ScenariosCommand::List(args) => {
            let page = scenarios.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        ScenariosCommand::Submit { id } => {
            let scenario = scenarios.submit(id).await?;
            println!("场景 {} 已提交审批", scenario.scenario_name);
        }
        ScenariosCommand::Approve {
            id,
            approver,
            comment,
        } => {
            let scenario = scenarios.approve(id, approver, comment.as_deref()).await?;
            println!("场景 {} 已批准", scenario.scenario_name);
        }
        ScenariosCommand::Reject {
            id,
            approver,
            reason,
        } => {
            let scenario = scenarios.reject(id, approver, &reason).await?;
            println!("场景 {} 已拒绝", scenario.scenario_name);
        }
        ScenariosCommand::BatchApprove {
            ids,
            approver,
            comment,
        } => {
            let outcome = client
                .batch()
                .approve_scenarios(&ids, approver, comment.as_deref())
                .await?;
            print_outcome(&outcome);
        }
        ScenariosCommand::BatchReject {
            ids,
            approver,
            reason,
        } => {
            let outcome = client
                .batch()
                .reject_scenarios(&ids, approver, &reason)
                .await?;
            print_outcome(&outcome);
        }
    }
    Ok(())
}

async fn run_risk(client: &CrossgateClient, command: RiskCommand) -> anyhow::Result<()> {
    let risk = client.risk();
    match command {
        RiskCommand::List(args) => {
            let page = risk.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        RiskCommand::Calculate { id } => {
            let assessment = risk.calculate(id).await?;
            print_json(&assessment)?;
        }
        RiskCommand::ThresholdCheck { id } => {
            let check = risk.threshold_check(id).await?;
            if check.warnings.is_empty() {
                println!("未触发任何阈值告警");
            } else {
                for warning in &check.warnings {
                    println!("[{}] {}: {}", warning.level, warning.warning_type, warning.message);
                }
            }
        }
    }
    Ok(())
}

async fn run_approvals(client: &CrossgateClient, command: ApprovalsCommand) -> anyhow::Result<()> {
    let approvals = client.approvals();
    match command {
        ApprovalsCommand::List(args) => {
            let page = approvals.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        ApprovalsCommand::Approve {
            id,
            approver,
            comment,
        } => {
            let approval = approvals.approve(id, approver, comment.as_deref()).await?;
            println!("审批 {} 已批准", approval.id);
        }
        ApprovalsCommand::Reject {
            id,
            approver,
            reason,
        } => {
            let approval = approvals.reject(id, approver, &reason).await?;
            println!("审批 {} 已拒绝", approval.id);
        }
    }
    Ok(())
}

async fn run_audit(client: &CrossgateClient, command: AuditCommand) -> anyhow::Result<()> {
    let audit = client.audit();
    match command {
        AuditCommand::List(args) => {
            let page = audit.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        AuditCommand::Stats { days } => {
            let stats = audit.statistics(days).await?;
            print_json(&stats)?;
        }
        AuditCommand::Anomalies(args) => {
            let page = audit.anomalies(&args.to_query()?).await?;
            print_page(&page)?;
        }
    }
    Ok(())
}

async fn run_users(client: &CrossgateClient, command: UsersCommand) -> anyhow::Result<()> {
    let users = client.users();
    match command {
        UsersCommand::List(args) => {
            let page = users.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        UsersCommand::Delete { id } => {
            let response = users.delete(id).await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

async fn run_roles(client: &CrossgateClient, command: RolesCommand) -> anyhow::Result<()> {
    let roles = client.roles();
    match command {
        RolesCommand::List => {
            let page = roles.list().await?;
            print_page(&page)?;
        }
        RolesCommand::Assign { user, roles: ids } => {
            let payload = UserRoleAssign {
                user_id: user,
                role_ids: ids,
            };
            let response = roles.assign(&payload).await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

async fn run_notifications(
    client: &CrossgateClient,
    command: NotificationsCommand,
) -> anyhow::Result<()> {
    let notifications = client.notifications();
    match command {
        NotificationsCommand::List(args) => {
            let page = notifications.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        NotificationsCommand::Read { id } => {
            let notification = notifications.mark_read(id).await?;
            println!("通知已读: {}", notification.title);
        }
        NotificationsCommand::ReadAll => {
            let response = notifications.mark_all_read().await?;
            println!("{}", response.message);
        }
        NotificationsCommand::Stats => {
            let stats = notifications.stats().await?;
            println!("未读 {} / 共 {}", stats.unread, stats.total);
        }
    }
    Ok(())
}

async fn run_config(client: &CrossgateClient, command: ConfigCommand) -> anyhow::Result<()> {
    let config = client.system_config();
    match command {
        ConfigCommand::List(args) => {
            let page = config.list(&args.to_query()?).await?;
            print_page(&page)?;
        }
        ConfigCommand::Get { key } => {
            let entry = config.get_by_key(&key).await?;
            print_json(&entry)?;
        }
        ConfigCommand::Set {
            key,
            value,
            config_type,
        } => {
            let config_type = parse_config_type(&config_type)?;
            let entry = config.set_value(&key, config_type, &value).await?;
            println!("{} = {}", entry.config_key, entry.config_value);
        }
    }
    Ok(())
}

async fn run_interception(
    client: &CrossgateClient,
    command: InterceptionCommand,
) -> anyhow::Result<()> {
    let interception = client.interception();
    match command {
        InterceptionCommand::Whitelist { add, remove } => {
            if let Some(approval_id) = add {
                let response = interception.add_to_whitelist(approval_id).await?;
                println!("{}", response.message);
            }
            if let Some(approval_id) = remove {
                let response = interception.remove_from_whitelist(approval_id).await?;
                println!("{}", response.message);
            }
            let entries = interception.whitelist().await?;
            print_json(&entries)?;
        }
        InterceptionCommand::Blacklist {
            add,
            reason,
            remove,
        } => {
            if let Some(asset_id) = add {
                let response = interception
                    .add_to_blacklist(asset_id, reason.as_deref())
                    .await?;
                println!("{}", response.message);
            }
            if let Some(asset_id) = remove {
                let response = interception.remove_from_blacklist(asset_id).await?;
                println!("{}", response.message);
            }
            let entries = interception.blacklist().await?;
            print_json(&entries)?;
        }
        InterceptionCommand::Desensitize { file } => {
            let request: DesensitizationRequest = read_payload(&file)?;
            let response = interception.desensitize(&request).await?;
            print_json(&response)?;
        }
    }
    Ok(())
}

async fn run_dashboard(client: &CrossgateClient, days: u32) -> anyhow::Result<()> {
    let snapshot = client.dashboard().snapshot(days).await;

    let branches = [
        ("总览", &snapshot.overview),
        ("传输趋势", &snapshot.transfer_trends),
        ("国家分布", &snapshot.country_distribution),
        ("风险告警", &snapshot.risk_alerts),
        ("资产统计", &snapshot.data_asset_statistics),
        ("风险统计", &snapshot.risk_statistics),
        ("审批统计", &snapshot.approval_statistics),
        ("操作统计", &snapshot.operation_statistics),
    ];
    for (name, value) in branches {
        if let Some(value) = value {
            println!("== {} ==", name);
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }

    if !snapshot.is_complete() {
        for (branch, error) in &snapshot.failures {
            eprintln!("加载失败 [{}]: {}", branch, error);
        }
    }
    Ok(())
}

fn print_page<T: Serialize>(page: &ResourcePage<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&page.items)?);
    println!("共 {} 条", page.total);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 批量结果必须同时展示成功与失败数量。
fn print_outcome(outcome: &BatchOutcome) {
    println!("{}", outcome.summary());
    for error in &outcome.errors {
        println!("  - {}", error);
    }
}

fn read_payload<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("无法读取 {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&json)?)
}

fn parse_config_type(s: &str) -> anyhow::Result<ConfigType> {
    match s {
        "string" => Ok(ConfigType::String),
        "integer" => Ok(ConfigType::Integer),
        "float" => Ok(ConfigType::Float),
        "boolean" => Ok(ConfigType::Boolean),
        "json" => Ok(ConfigType::Json),
        other => Err(anyhow::anyhow!("未知的配置类型: {}", other)),
    }
}

fn parse_export_format(s: &str) -> anyhow::Result<ExportFormat> {
    match s {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(anyhow::anyhow!("未知的导出格式: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse_and_paginate() {
        let args = ListArgs {
            page: 3,
            page_size: 20,
            filter: vec!["status=待审批".into(), "keyword=客户".into()],
        };
        let query = args.to_query().unwrap();
        assert_eq!(query.skip, 40);
        assert_eq!(query.limit, 20);
        assert_eq!(query.filters["status"], "待审批");

        let bad = ListArgs {
            page: 1,
            page_size: 10,
            filter: vec!["无等号".into()],
        };
        assert!(bad.to_query().is_err());
    }

    #[test]
    fn config_type_names_parse() {
        assert!(matches!(
            parse_config_type("integer").unwrap(),
            ConfigType::Integer
        ));
        assert!(parse_config_type("decimal").is_err());
    }
}
