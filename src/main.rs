use clap::Parser;

use pipe_flow_toolbox::{app, config, i18n};

/// 배관 유동 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "pipe_flow_toolbox", version, about = "Pipe Flow Toolbox CLI")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 경로
    #[arg(long)]
    locales: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
