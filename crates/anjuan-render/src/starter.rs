//! Built-in starter templates, installable into a templates directory.
//!
//! The binary carries one usable template per [`TemplateKind`] so a fresh
//! case root can generate records before anyone has customized anything.
//! Installed files are plain text; operators edit them in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RenderError;
use crate::template::TemplateKind;

const SELF_ORDINARY: &str = r#"工伤认定调查笔录

案号：{案号}
案件类型：{案件类型}
调查时间：{当前日期} {当前时间}
调查人员：{操作员}

被调查人：{本人姓名}　性别：{本人性别}　年龄：{本人年龄}
身份证号：{本人身份证号}
身份证地址：{本人身份证地址}
现住址：{本人现住址}
联系电话：{本人电话}
工作岗位：{本人岗位}

问：请说明你的基本情况。
答：我叫{本人姓名}，{本人性别}，今年{本人年龄}岁，身份证号{本人身份证号}，现住{本人现住址}，联系电话{本人电话}。

问：你在何单位从事何种工作？
答：我在{用人单位}工作，用工单位为{用工单位}，工作场所位于{工作场所}，岗位是{本人岗位}。

问：请叙述事故发生的经过。
答：

问：你的陈述是否属实？
答：属实。

本次调查依据《工伤保险条例》{条例}的规定进行。

被调查人（签名）：

调查人（签名）：{操作员}

{生成时间}
"#;

const SELF_SUPPLEMENT: &str = r#"工伤认定调查补充笔录

案号：{案号}
案件类型：{案件类型}
调查时间：{当前日期} {当前时间}
调查人员：{操作员}

被调查人：{本人姓名}　性别：{本人性别}　年龄：{本人年龄}
身份证号：{本人身份证号}
联系电话：{本人电话}

问：今天就你工伤一案向你作补充调查，你是否知晓？
答：知晓。

问：请就前次笔录未尽事项作补充说明。
答：

问：你的补充陈述是否属实？
答：属实。

本次调查依据《工伤保险条例》{条例}的规定进行。

被调查人（签名）：

调查人（签名）：{操作员}

{生成时间}
"#;

const WITNESS: &str = r#"工伤认定调查笔录（证人）

案号：{案号}
案件类型：{案件类型}
受伤职工：{受伤职工}
调查时间：{当前日期} {当前时间}
调查人员：{操作员}

证人：{证人姓名}　性别：{证人性别}　年龄：{证人年龄}
身份证号：{证人身份证号}
现住址：{证人现住址}
联系电话：{证人电话}
工作岗位：{证人岗位}

问：请说明你与受伤职工{受伤职工}的关系。
答：我是{用人单位}的员工，岗位是{证人岗位}，与{受伤职工}是同事。

问：请叙述你所了解的事故经过。
答：

问：你愿意对你的证言负责吗？
答：愿意，以上证言属实。

本次调查依据《工伤保险条例》{条例}的规定进行。

证人（签名）：

调查人（签名）：{操作员}

{生成时间}
"#;

const LEGAL_ENTITY: &str = r#"工伤认定调查笔录（用人单位）

案号：{案号}
案件类型：{案件类型}
受伤职工：{受伤职工}
调查时间：{当前日期} {当前时间}
调查人员：{操作员}

被调查人：{法人姓名}　性别：{法人性别}　年龄：{法人年龄}
身份证号：{法人身份证号}
联系电话：{法人电话}
职务：{法人岗位}

问：请说明你的身份及与用人单位的关系。
答：我是{用人单位}的{法人岗位}，受单位委托接受调查。

问：{受伤职工}是否为贵单位职工？用工情况如何？
答：{受伤职工}在我单位工作，用工单位为{用工单位}，工作场所位于{工作场所}。

问：请叙述贵单位所了解的事故情况。
答：

问：你的陈述是否属实？
答：属实。

本次调查依据《工伤保险条例》{条例}的规定进行。

被调查人（签名）：

调查人（签名）：{操作员}

{生成时间}
"#;

/// The built-in text for a template kind.
pub fn starter_text(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::SelfOrdinary => SELF_ORDINARY,
        TemplateKind::SelfSupplement => SELF_SUPPLEMENT,
        TemplateKind::Witness => WITNESS,
        TemplateKind::LegalEntity => LEGAL_ENTITY,
    }
}

/// Write the starter templates into `templates_dir`, returning the paths
/// written. Files already present are left alone unless `force` is set.
pub fn install_starter_templates(
    templates_dir: &Path,
    force: bool,
) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(templates_dir)?;

    let mut written = Vec::new();
    for kind in TemplateKind::ALL {
        let path = templates_dir.join(kind.file_name());
        if path.exists() && !force {
            continue;
        }
        fs::write(&path, starter_text(kind))?;
        info!(path = %path.display(), "starter template written");
        written.push(path);
    }
    Ok(written)
}
