//! Template file contents
//!
//! Script, markup and config templates are shared by both families; only the
//! stylesheet dialect differs.

/// Page script
pub const PAGE_JS: &str = r"Page({
  data: {
    title: '{{title}}'
  },

  onLoad(options) {},

  onShow() {},

  onPullDownRefresh() {
    wx.stopPullDownRefresh();
  },

  onShareAppMessage() {
    return {
      title: '{{title}}',
      path: '/{{kind}}/{{name}}/{{name}}'
    };
  }
});
";

/// Page markup
pub const PAGE_HTML: &str = r#"<view class="{{name}}">
  <text class="{{name}}__title">{{title}}</text>
</view>
"#;

/// Page config
pub const PAGE_JSON: &str = r#"{
  "navigationBarTitleText": "{{title}}",
  "usingComponents": {}
}
"#;

/// Page stylesheet, stylus dialect
pub const PAGE_STYL: &str = r".{{name}}
  display block
  min-height 100vh

  &__title
    font-size 32rpx
";

/// Page stylesheet, less dialect
pub const PAGE_LESS: &str = r".{{name}} {
  display: block;
  min-height: 100vh;

  &__title {
    font-size: 32rpx;
  }
}
";

/// Component script
pub const COMPONENT_JS: &str = r"// {{pascal_name}} component
Component({
  options: {
    multipleSlots: true
  },

  properties: {},

  data: {},

  methods: {}
});
";

/// Component markup
pub const COMPONENT_HTML: &str = r#"<view class="{{name}}">
  <slot></slot>
</view>
"#;

/// Component config
pub const COMPONENT_JSON: &str = r#"{
  "component": true,
  "usingComponents": {}
}
"#;

/// Component stylesheet, stylus dialect
pub const COMPONENT_STYL: &str = r".{{name}}
  display block
";

/// Component stylesheet, less dialect
pub const COMPONENT_LESS: &str = r".{{name}} {
  display: block;
}
";
