fn main() -> anyhow::Result<()> {
    cpufreq_info::start_cpufi()
}
