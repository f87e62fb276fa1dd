// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use clap::ValueEnum;

/// Display language for every piece of user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    /// Cycle to the next language.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// The label table for this language.
    #[must_use]
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }
}

/// Every user-facing string in one place, so adding a language is a
/// single new table.
pub struct Labels {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub config_panel: &'static str,
    pub export: &'static str,
    pub reset: &'static str,
    pub exported_to: &'static str,
    pub export_failed: &'static str,

    // Inputs
    pub l1_units: &'static str,
    pub l1_units_desc: &'static str,
    pub gpus_per_l1: &'static str,
    pub gpus_per_l1_desc: &'static str,
    pub rtsw_per_l1: &'static str,
    pub rtsw_per_l1_desc: &'static str,
    pub ftsw_per_l1: &'static str,
    pub ftsw_per_l1_desc: &'static str,
    pub stsw_ratio: &'static str,
    pub stsw_ratio_desc: &'static str,
    pub derived_field: &'static str,
    pub sizing_explicit: &'static str,
    pub sizing_derived: &'static str,

    // Stats
    pub total_gpus: &'static str,
    pub total_rtsw: &'static str,
    pub total_ftsw: &'static str,
    pub total_stsw: &'static str,
    pub total_chips: &'static str,

    // Diagram
    pub rep_view: &'static str,
    pub spine_layer: &'static str,
    pub spine_switch_subtitle: &'static str,
    pub l1_unit: &'static str,
    pub ftsw_layer: &'static str,
    pub rtsw_layer: &'static str,
    pub compute: &'static str,
    pub gpus: &'static str,
    pub full_mesh: &'static str,
}

pub static EN: Labels = Labels {
    app_title: "LOOM Planner",
    app_subtitle: "AI CLUSTER TOPOLOGY SIZING",
    config_panel: "Config Panel",
    export: "Export",
    reset: "Reset",
    exported_to: "Configuration and stats written to",
    export_failed: "Export failed",

    l1_units: "L1 Units (Racks)",
    l1_units_desc: "Number of compute racks/pods in the cluster.",
    gpus_per_l1: "GPUs per L1 Unit",
    gpus_per_l1_desc: "Compute density per L1 unit.",
    rtsw_per_l1: "RTSW per L1",
    rtsw_per_l1_desc: "Leaf switches within the rack.",
    ftsw_per_l1: "FTSW per L1",
    ftsw_per_l1_desc: "Fabric tier switches aggregating RTSWs.",
    stsw_ratio: "STSW Ratio",
    stsw_ratio_desc: "Ratio of spine switches to L1 units.",
    derived_field: "derived from GPU density",
    sizing_explicit: "Switch sizing: explicit",
    sizing_derived: "Switch sizing: derived",

    total_gpus: "Total GPUs",
    total_rtsw: "RTSW Chips (L1)",
    total_ftsw: "FTSW Chips (L2)",
    total_stsw: "STSW Chips (Spine)",
    total_chips: "Total Network Chips",

    rep_view: "Representative Logical View",
    spine_layer: "STSW Group",
    spine_switch_subtitle: "Switch Aggregate",
    l1_unit: "L1 Unit",
    ftsw_layer: "FTSW Layer",
    rtsw_layer: "RTSW Layer",
    compute: "Compute",
    gpus: "GPUs",
    full_mesh: "full mesh",
};

pub static ZH: Labels = Labels {
    app_title: "LOOM 规划器",
    app_subtitle: "AI 集群拓扑规模计算",
    config_panel: "配置面板",
    export: "导出配置",
    reset: "重置",
    exported_to: "配置和统计数据已写入",
    export_failed: "导出失败",

    l1_units: "L1 单元 (机柜)",
    l1_units_desc: "集群中的计算机柜/Pod数量。",
    gpus_per_l1: "单单元 GPU 数",
    gpus_per_l1_desc: "每个 L1 单元的计算密度。",
    rtsw_per_l1: "L1 交换机 (RTSW)",
    rtsw_per_l1_desc: "机柜内的叶交换机数量。",
    ftsw_per_l1: "L2 交换机 (FTSW)",
    ftsw_per_l1_desc: "聚合 RTSW 的 Fabric 层交换机。",
    stsw_ratio: "脊交换机比率 (STSW)",
    stsw_ratio_desc: "脊交换机与 L1 单元的比率。",
    derived_field: "由 GPU 密度推导",
    sizing_explicit: "交换机规模：手动",
    sizing_derived: "交换机规模：推导",

    total_gpus: "GPU 总数",
    total_rtsw: "RTSW 芯片 (L1)",
    total_ftsw: "FTSW 芯片 (L2)",
    total_stsw: "STSW 芯片 (脊层)",
    total_chips: "网络芯片总数",

    rep_view: "逻辑拓扑概览",
    spine_layer: "STSW 交换平面",
    spine_switch_subtitle: "交换机聚合组",
    l1_unit: "L1 单元",
    ftsw_layer: "FTSW 层",
    rtsw_layer: "RTSW 层",
    compute: "计算节点",
    gpus: "GPU",
    full_mesh: "全互联",
};
